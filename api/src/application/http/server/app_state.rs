use std::sync::Arc;

use carepulse_core::application::CarePulseService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: CarePulseService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: CarePulseService) -> Self {
        Self { args, service }
    }
}
