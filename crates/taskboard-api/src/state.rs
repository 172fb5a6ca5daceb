use std::sync::Arc;

use taskboard_core::TaskUsecase;

#[derive(Clone)]
pub struct ApiState {
    pub tasks: Arc<TaskUsecase>,
}
