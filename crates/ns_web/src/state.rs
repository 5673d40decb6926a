use ns_sources::NewsService;
use ns_storage::SessionStore;

pub struct AppState {
    pub news: NewsService,
    pub session: SessionStore,
}

impl AppState {
    pub fn new(news: NewsService) -> Self {
        Self {
            news,
            session: SessionStore::new(),
        }
    }
}
