use crate::{AccountDto, SocialConnectionDto};

use fin_core::{Account, SocialConnection};

use serde::Serialize;

/// Admin view of an account: its public fields paired with the social
/// connection records read from the store.
#[derive(Debug, Serialize)]
pub struct AccountOverview {
    pub account: AccountDto,
    pub connections: Vec<SocialConnectionDto>,
}

impl AccountOverview {
    pub fn new(account: Account, connections: Vec<SocialConnection>) -> Self {
        Self {
            account: AccountDto::from(account),
            connections: connections
                .into_iter()
                .map(SocialConnectionDto::from)
                .collect(),
        }
    }
}
