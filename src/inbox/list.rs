//! Conversation list: search, filters and the highlight cursor

use crate::input_utils::TextInput;
use crate::store::{Conversation, ConversationStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Unread,
    Priority,
    Snoozed,
}

impl Filter {
    pub const ALL: [Filter; 4] = [Filter::All, Filter::Unread, Filter::Priority, Filter::Snoozed];

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Unread => "Unread",
            Filter::Priority => "Priority",
            Filter::Snoozed => "Snoozed",
        }
    }

    fn matches(self, conversation: &Conversation) -> bool {
        match self {
            Filter::All => true,
            Filter::Unread => conversation.unread,
            Filter::Priority => conversation.priority,
            // Snoozing is a chat-local toggle; nothing is snoozed at store level
            Filter::Snoozed => false,
        }
    }

    fn index(self) -> usize {
        Filter::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Filter::ALL[(self.index() + 1) % Filter::ALL.len()]
    }

    fn previous(self) -> Self {
        Filter::ALL[(self.index() + Filter::ALL.len() - 1) % Filter::ALL.len()]
    }
}

fn matches_search(conversation: &Conversation, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    let user = &conversation.user;
    user.name.to_lowercase().contains(&query)
        || user
            .company
            .as_ref()
            .is_some_and(|company| company.to_lowercase().contains(&query))
        || conversation.preview.to_lowercase().contains(&query)
}

#[derive(Debug, Clone, Default)]
pub struct ConversationList {
    pub search: TextInput,
    filter: Filter,
    cursor: usize,
}

impl ConversationList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Conversations passing both the search and the active filter, in store order
    pub fn visible<'a>(&self, store: &'a ConversationStore) -> Vec<&'a Conversation> {
        let query = self.search.value();
        store
            .all()
            .iter()
            .filter(|c| matches_search(c, &query) && self.filter.matches(c))
            .collect()
    }

    pub fn set_filter(&mut self, filter: Filter, store: &ConversationStore) {
        self.filter = filter;
        self.clamp(store);
    }

    pub fn next_filter(&mut self, store: &ConversationStore) {
        self.set_filter(self.filter.next(), store);
    }

    pub fn previous_filter(&mut self, store: &ConversationStore) {
        self.set_filter(self.filter.previous(), store);
    }

    /// Call after editing `search`
    pub fn search_changed(&mut self, store: &ConversationStore) {
        self.clamp(store);
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self, store: &ConversationStore) {
        let len = self.visible(store).len();
        if self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    /// Id of the highlighted row
    pub fn highlighted(&self, store: &ConversationStore) -> Option<String> {
        self.visible(store).get(self.cursor).map(|c| c.id.clone())
    }

    /// Put the cursor on `id` if it is visible
    pub fn highlight(&mut self, id: &str, store: &ConversationStore) {
        if let Some(pos) = self.visible(store).iter().position(|c| c.id == id) {
            self.cursor = pos;
        }
    }

    fn clamp(&mut self, store: &ConversationStore) {
        let len = self.visible(store).len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ConversationStore {
        ConversationStore::sample().unwrap()
    }

    fn ids(list: &ConversationList, store: &ConversationStore) -> Vec<String> {
        list.visible(store).iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn test_all_filter_keeps_store_order() {
        let store = store();
        let list = ConversationList::new();
        assert_eq!(ids(&list, &store), vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_unread_and_priority_filters() {
        let store = store();
        let mut list = ConversationList::new();
        list.set_filter(Filter::Unread, &store);
        assert_eq!(ids(&list, &store), vec!["2"]);
        list.set_filter(Filter::Priority, &store);
        assert_eq!(ids(&list, &store), vec!["2"]);
    }

    #[test]
    fn test_snoozed_filter_is_empty() {
        let store = store();
        let mut list = ConversationList::new();
        list.set_filter(Filter::Snoozed, &store);
        assert!(list.visible(&store).is_empty());
        assert_eq!(list.highlighted(&store), None);
    }

    #[test]
    fn test_search_is_case_insensitive_over_name_company_preview() {
        let store = store();
        let mut list = ConversationList::new();

        list.search.insert_str("NIKE");
        assert_eq!(ids(&list, &store), vec!["2"]);

        list.search.clear();
        list.search.insert_str("miracle");
        assert_eq!(ids(&list, &store), vec!["5"]);

        list.search.clear();
        list.search.insert_str("booking api");
        assert_eq!(ids(&list, &store), vec!["4"]);
    }

    #[test]
    fn test_search_and_filter_combine() {
        let store = store();
        let mut list = ConversationList::new();
        list.search.insert_str("luis");
        list.set_filter(Filter::Unread, &store);
        assert!(list.visible(&store).is_empty());
    }

    #[test]
    fn test_cursor_clamps_to_visible() {
        let store = store();
        let mut list = ConversationList::new();
        for _ in 0..10 {
            list.move_down(&store);
        }
        assert_eq!(list.cursor(), 4);
        assert_eq!(list.highlighted(&store).as_deref(), Some("5"));

        list.set_filter(Filter::Unread, &store);
        assert_eq!(list.cursor(), 0);
        assert_eq!(list.highlighted(&store).as_deref(), Some("2"));

        list.move_up();
        assert_eq!(list.cursor(), 0);
    }

    #[test]
    fn test_filter_cycles() {
        let store = store();
        let mut list = ConversationList::new();
        list.previous_filter(&store);
        assert_eq!(list.filter(), Filter::Snoozed);
        list.next_filter(&store);
        assert_eq!(list.filter(), Filter::All);
        list.next_filter(&store);
        assert_eq!(list.filter(), Filter::Unread);
    }

    #[test]
    fn test_highlight_follows_id() {
        let store = store();
        let mut list = ConversationList::new();
        list.highlight("3", &store);
        assert_eq!(list.cursor(), 2);
        list.highlight("missing", &store);
        assert_eq!(list.cursor(), 2);
    }
}
