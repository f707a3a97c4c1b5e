use std::sync::Arc;

use skyfare_offer::FareService;

#[derive(Clone)]
pub struct AppState {
    pub fares: Arc<FareService>,
}
