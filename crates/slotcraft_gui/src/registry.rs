//! Page registry
//!
//! Owns every page of a plugin and maps live containers back to the page
//! that created them. Retention is bounded by default: once more pages
//! are kept than allowed, the least recently opened page that nobody is
//! viewing is dropped. A page counts as viewed from `open` until the host
//! reports the container closed through [`PageRegistry::close`]; viewed
//! pages may push the registry over its bound.

use crate::page::Page;
use slotcraft_core::{ContainerHost, ContainerId, PageRetention, ParticipantId, SlotcraftConfig};
use std::collections::{HashMap, VecDeque};
use std::fmt;

/// Handle to a page owned by a [`PageRegistry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(u64);

impl PageId {
    /// Raw value
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "page#{}", self.0)
    }
}

/// Registry of pages
pub struct PageRegistry {
    pages: HashMap<PageId, Page>,
    by_container: HashMap<ContainerId, PageId>,
    /// Least recently opened first
    order: VecDeque<PageId>,
    retention: PageRetention,
    next_id: u64,
}

impl PageRegistry {
    /// Create an empty registry
    pub fn new(retention: PageRetention) -> Self {
        Self {
            pages: HashMap::new(),
            by_container: HashMap::new(),
            order: VecDeque::new(),
            retention,
            next_id: 1,
        }
    }

    /// Create an empty registry with the configured retention
    pub fn from_config(config: &SlotcraftConfig) -> Self {
        Self::new(config.gui.page_retention)
    }

    /// Retention policy
    pub fn retention(&self) -> PageRetention {
        self.retention
    }

    /// Take ownership of a page
    ///
    /// May evict the least recently opened page to stay within bounds.
    pub fn insert(&mut self, page: Page) -> PageId {
        let id = PageId(self.next_id);
        self.next_id += 1;

        if let Some(container) = page.container_id() {
            self.by_container.insert(container, id);
        }
        self.pages.insert(id, page);
        self.order.push_back(id);
        self.evict();
        id
    }

    /// Open a page for a viewer, binding it to a new container
    pub fn open<H: ContainerHost + ?Sized>(&mut self, id: PageId, host: &H, viewer: ParticipantId) -> Option<ContainerId> {
        let page = self.pages.get_mut(&id)?;
        if let Some(old) = page.container_id() {
            self.by_container.remove(&old);
        }
        let container = page.open(host, viewer);
        self.by_container.insert(container, id);
        self.touch(id);
        Some(container)
    }

    /// Get a page
    pub fn get(&self, id: PageId) -> Option<&Page> {
        self.pages.get(&id)
    }

    /// Get a page, mutable
    pub fn get_mut(&mut self, id: PageId) -> Option<&mut Page> {
        self.pages.get_mut(&id)
    }

    /// Page bound to a live container
    pub fn page_for(&self, container: ContainerId) -> Option<&Page> {
        self.pages.get(self.by_container.get(&container)?)
    }

    /// Page bound to a live container, mutable
    pub fn page_for_mut(&mut self, container: ContainerId) -> Option<&mut Page> {
        let id = *self.by_container.get(&container)?;
        self.pages.get_mut(&id)
    }

    /// Id of the page bound to a live container
    pub fn page_id_for(&self, container: ContainerId) -> Option<PageId> {
        self.by_container.get(&container).copied()
    }

    /// Check if a page is still kept
    pub fn exists(&self, id: PageId) -> bool {
        self.pages.contains_key(&id)
    }

    /// Forget a container the host has closed
    ///
    /// The page stays kept but becomes eligible for eviction. Returns the
    /// page that was bound to the container.
    pub fn close(&mut self, container: ContainerId) -> Option<PageId> {
        let id = self.by_container.remove(&container)?;
        log::debug!("Closed {} ({})", id, container);
        self.evict();
        Some(id)
    }

    /// Whether a page is bound to a container that has not been closed
    pub fn is_viewed(&self, id: PageId) -> bool {
        self.pages
            .get(&id)
            .and_then(Page::container_id)
            .is_some_and(|container| self.by_container.get(&container) == Some(&id))
    }

    /// Drop a page and forget its container
    pub fn dispose(&mut self, id: PageId) -> Option<Page> {
        let page = self.pages.remove(&id)?;
        if let Some(container) = page.container_id() {
            self.by_container.remove(&container);
        }
        self.order.retain(|&other| other != id);
        log::debug!("Disposed {} ('{}')", id, page.title());
        Some(page)
    }

    /// Number of kept pages
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Check if no pages are kept
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Iterate kept pages
    pub fn iter(&self) -> impl Iterator<Item = (PageId, &Page)> {
        self.pages.iter().map(|(&id, page)| (id, page))
    }

    fn touch(&mut self, id: PageId) {
        self.order.retain(|&other| other != id);
        self.order.push_back(id);
    }

    fn evict(&mut self) {
        let PageRetention::Bounded(max) = self.retention else {
            return;
        };
        while self.pages.len() > max {
            // The most recently inserted or opened page always stays
            let candidates = self.order.len().saturating_sub(1);
            let Some(index) = self.order.iter().take(candidates).position(|&id| !self.is_viewed(id)) else {
                log::debug!("Keeping {} pages over the bound of {}, all are viewed", self.pages.len(), max);
                break;
            };
            let Some(oldest) = self.order.remove(index) else {
                break;
            };
            if let Some(page) = self.pages.remove(&oldest) {
                log::debug!("Evicted {} ('{}')", oldest, page.title());
            }
        }
    }
}

impl Default for PageRegistry {
    fn default() -> Self {
        Self::new(PageRetention::default())
    }
}

impl fmt::Debug for PageRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageRegistry")
            .field("pages", &self.pages.len())
            .field("retention", &self.retention)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotcraft_core::{Material, MemoryServer};

    fn page(title: &str) -> Page {
        Page::new(1, title, Material::GRAY_STAINED_GLASS_PANE).unwrap()
    }

    #[test]
    fn test_open_maps_container() {
        let server = MemoryServer::new();
        let mut registry = PageRegistry::new(PageRetention::Unbounded);
        let id = registry.insert(page("Shop"));

        let first = registry.open(id, &server, ParticipantId::new()).unwrap();
        assert_eq!(registry.page_id_for(first), Some(id));

        // Reopening rebinds
        let second = registry.open(id, &server, ParticipantId::new()).unwrap();
        assert_eq!(registry.page_id_for(first), None);
        assert_eq!(registry.page_for(second).map(Page::title), Some("Shop"));
    }

    #[test]
    fn test_insert_already_open_page() {
        let server = MemoryServer::new();
        let mut page = page("Shop");
        let container = page.open(&server, ParticipantId::new());

        let mut registry = PageRegistry::default();
        let id = registry.insert(page);
        assert_eq!(registry.page_id_for(container), Some(id));
    }

    #[test]
    fn test_bounded_retention_evicts_least_recently_opened() {
        let server = MemoryServer::new();
        let viewer = ParticipantId::new();
        let mut registry = PageRegistry::new(PageRetention::Bounded(2));

        let a = registry.insert(page("A"));
        let b = registry.insert(page("B"));
        let a_container = registry.open(a, &server, viewer).unwrap();
        registry.close(a_container);

        // B is now the least recently opened
        let c = registry.insert(page("C"));

        assert_eq!(registry.len(), 2);
        assert!(registry.exists(a));
        assert!(!registry.exists(b));
        assert!(registry.exists(c));
    }

    #[test]
    fn test_viewed_pages_are_not_evicted() {
        let server = MemoryServer::new();
        let mut registry = PageRegistry::new(PageRetention::Bounded(1));
        let a = registry.insert(page("A"));
        let container = registry.open(a, &server, ParticipantId::new()).unwrap();

        let b = registry.insert(page("B"));
        assert_eq!(registry.len(), 2);
        assert!(registry.is_viewed(a));
        assert_eq!(registry.page_id_for(container), Some(a));

        // Closing lets the registry shrink back to its bound
        assert_eq!(registry.close(container), Some(a));
        assert!(!registry.exists(a));
        assert!(registry.exists(b));
        assert!(registry.page_for(container).is_none());
    }

    #[test]
    fn test_newest_page_survives_when_others_are_viewed() {
        let server = MemoryServer::new();
        let mut registry = PageRegistry::new(PageRetention::Bounded(1));
        let a = registry.insert(page("A"));
        registry.open(a, &server, ParticipantId::new());

        let b = registry.insert(page("B"));
        let c = registry.insert(page("C"));

        assert!(registry.exists(a));
        assert!(!registry.exists(b));
        assert!(registry.exists(c));
    }

    #[test]
    fn test_close_unknown_container() {
        let mut registry = PageRegistry::default();
        assert_eq!(registry.close(ContainerId::new()), None);
    }

    #[test]
    fn test_unbounded_keeps_everything() {
        let mut registry = PageRegistry::new(PageRetention::Unbounded);
        for i in 0..300 {
            registry.insert(page(&format!("Page {}", i)));
        }
        assert_eq!(registry.len(), 300);
    }

    #[test]
    fn test_dispose() {
        let server = MemoryServer::new();
        let mut registry = PageRegistry::default();
        let id = registry.insert(page("Shop"));
        let container = registry.open(id, &server, ParticipantId::new()).unwrap();

        let page = registry.dispose(id).unwrap();
        assert_eq!(page.title(), "Shop");
        assert!(registry.page_for(container).is_none());
        assert!(registry.dispose(id).is_none());
        assert!(registry.open(id, &server, ParticipantId::new()).is_none());
    }

    #[test]
    fn test_from_config() {
        let config = SlotcraftConfig::from_toml_str("[gui]\npage_retention = \"unbounded\"").unwrap();
        assert_eq!(PageRegistry::from_config(&config).retention(), PageRetention::Unbounded);
    }
}
