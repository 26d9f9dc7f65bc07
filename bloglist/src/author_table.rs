use std::collections::HashMap;

// Accumulators grouped by author, kept in the order authors first appeared
pub struct AuthorTable<'a, A>
{
    // Position of each author in the rows vector
    ids: HashMap<&'a str, usize>,
    // Author and its accumulator, in order of first appearance
    rows: Vec<(&'a str, A)>
}

impl<'a, A> AuthorTable<'a, A> where A: Default
{
    // Create an empty table
    pub fn new() -> Self
    {
        return Self { ids: HashMap::new(), rows: Vec::new() };
    }

    // Get the accumulator of an author, adding a default one on first appearance
    pub fn entry(&mut self, author: &'a str) -> &mut A
    {
        let id = match self.ids.get(author)
        {
            Some(id) => *id,
            None => {
                // The next free position is the first appearance order of the author
                let id = self.rows.len();
                self.ids.insert(author, id);
                self.rows.push((author, A::default()));
                id
            }
        };

        return &mut self.rows[id].1;
    }

    // Get an iterator over authors and accumulators in first appearance order
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &A)> + '_
    {
        self.rows.iter().map(|(author, acc)| (*author, acc))
    }

    // Author with the greatest key; on ties the earliest author wins
    pub fn max_by_key<K, F>(&self, key: F) -> Option<(&'a str, &A)> where K: Ord, F: Fn(&A) -> K
    {
        first_max_by_key(self.iter(), |(_, acc)| key(*acc))
    }
}

/// Maximum element of an iterator, keeping the current champion unless a later element strictly exceeds it
/// (`Iterator::max_by_key` would return the last of equal maximums)
pub fn first_max_by_key<I, K, F>(items: I, key: F) -> Option<I::Item> where I: IntoIterator, K: Ord, F: Fn(&I::Item) -> K
{
    let mut champion: Option<(K, I::Item)> = None;

    for item in items
    {
        let item_key = key(&item);
        let replace = match &champion
        {
            None => true,
            Some((champion_key, _)) => item_key > *champion_key
        };

        if replace
        {
            champion = Some((item_key, item));
        }
    }

    champion.map(|(_, item)| item)
}
