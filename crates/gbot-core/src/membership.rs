use async_trait::async_trait;

use crate::{domain::UserId, Result};

/// Channel membership status, as reported by the platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemberStatus {
    Owner,
    Administrator,
    Member,
    Restricted,
    Left,
    Banned,
}

/// Port answering "what is this user's status in the channel?".
#[async_trait]
pub trait MembershipPort: Send + Sync {
    async fn member_status(&self, channel: &str, user: UserId) -> Result<MemberStatus>;
}
