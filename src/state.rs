use std::sync::Arc;
use crate::config::Config;
use crate::domain::services::{
    gateway::StoreGateway,
    identity::{AccountIdentityProvider, IdentityResolver},
};
use crate::session::SessionRegistry;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub gateway: Arc<StoreGateway>,
    pub identity: Arc<IdentityResolver>,
    pub accounts: Arc<AccountIdentityProvider>,
    pub sessions: Arc<SessionRegistry>,
}
