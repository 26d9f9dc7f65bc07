use std::fmt::Display;
use clap::ValueEnum;
use serde_json::Value;
use crate::blog_service::BlogService;

/// Statistic to print from the command line
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum Statistic
{
    TotalLikes,
    FavoriteBlog,
    MostBlogs,
    MostLikes,
    Summary
}

impl Statistic
{
    // Compute the statistic as JSON, null when the blog list is empty
    pub fn compute(&self, service: &BlogService) -> serde_json::Result<Value>
    {
        match self
        {
            Statistic::TotalLikes => serde_json::to_value(service.total_likes()),
            Statistic::FavoriteBlog => serde_json::to_value(service.favorite_blog()),
            Statistic::MostBlogs => serde_json::to_value(service.most_blogs()),
            Statistic::MostLikes => serde_json::to_value(service.most_likes()),
            Statistic::Summary => serde_json::to_value(service.summary())
        }
    }

    // Render the statistic as plain text, "none" when the blog list is empty
    pub fn render_text(&self, service: &BlogService) -> String
    {
        match self
        {
            Statistic::TotalLikes => service.total_likes().to_string(),
            Statistic::FavoriteBlog => text_or_none(service.favorite_blog()),
            Statistic::MostBlogs => text_or_none(service.most_blogs()),
            Statistic::MostLikes => text_or_none(service.most_likes()),
            Statistic::Summary => {
                let summary = service.summary();
                format!(
                    "blogs: {}\ntotal likes: {}\nfavorite blog: {}\nmost blogs: {}\nmost likes: {}",
                    summary.blog_count,
                    summary.total_likes,
                    text_or_none(summary.favorite_blog),
                    text_or_none(summary.most_blogs),
                    text_or_none(summary.most_likes))
            }
        }
    }
}

/// How the statistic is written to the output
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum OutputFormat
{
    Json,
    Pretty,
    Text
}

impl OutputFormat
{
    pub fn render(&self, statistic: Statistic, service: &BlogService) -> serde_json::Result<String>
    {
        match self
        {
            OutputFormat::Json => serde_json::to_string(&statistic.compute(service)?),
            OutputFormat::Pretty => serde_json::to_string_pretty(&statistic.compute(service)?),
            OutputFormat::Text => Ok(statistic.render_text(service))
        }
    }
}

fn text_or_none<T>(value: Option<T>) -> String where T: Display
{
    match value
    {
        Some(value) => value.to_string(),
        None => String::from("none")
    }
}
