use std::sync::Arc;

use tracing::warn;

use crate::{
    domain::UserId,
    membership::{MemberStatus, MembershipPort},
};

/// Outcome of the subscription check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubscriptionStatus {
    Subscribed,
    NotSubscribed,
    /// The platform query failed; the triggering action is abandoned.
    CheckFailed,
}

/// The precondition in front of every content-serving entry point: is the
/// user currently a member of the required channel?
///
/// Stateless and read-only; callers decide what to show on each outcome.
pub struct SubscriptionGate {
    membership: Arc<dyn MembershipPort>,
    channel: String,
}

impl SubscriptionGate {
    pub fn new(membership: Arc<dyn MembershipPort>, channel: String) -> Self {
        Self { membership, channel }
    }

    pub async fn check(&self, user: UserId) -> SubscriptionStatus {
        match self.membership.member_status(&self.channel, user).await {
            Ok(MemberStatus::Member | MemberStatus::Administrator | MemberStatus::Owner) => {
                SubscriptionStatus::Subscribed
            }
            Ok(_) => SubscriptionStatus::NotSubscribed,
            Err(e) => {
                warn!("subscription check failed for user {}: {e}", user.0);
                SubscriptionStatus::CheckFailed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{errors::Error, Result};
    use async_trait::async_trait;

    struct FixedMembership(Result<MemberStatus>);

    #[async_trait]
    impl MembershipPort for FixedMembership {
        async fn member_status(&self, _channel: &str, _user: UserId) -> Result<MemberStatus> {
            match &self.0 {
                Ok(s) => Ok(*s),
                Err(_) => Err(Error::Telegram("boom".to_string())),
            }
        }
    }

    async fn check_with(status: Result<MemberStatus>) -> SubscriptionStatus {
        let gate = SubscriptionGate::new(Arc::new(FixedMembership(status)), "@chan".to_string());
        gate.check(UserId(42)).await
    }

    #[tokio::test]
    async fn member_admin_owner_are_subscribed() {
        for s in [
            MemberStatus::Member,
            MemberStatus::Administrator,
            MemberStatus::Owner,
        ] {
            assert_eq!(check_with(Ok(s)).await, SubscriptionStatus::Subscribed);
        }
    }

    #[tokio::test]
    async fn restricted_left_banned_are_not() {
        for s in [
            MemberStatus::Restricted,
            MemberStatus::Left,
            MemberStatus::Banned,
        ] {
            assert_eq!(check_with(Ok(s)).await, SubscriptionStatus::NotSubscribed);
        }
    }

    #[tokio::test]
    async fn transport_failure_maps_to_check_failed() {
        let got = check_with(Err(Error::Telegram("down".to_string()))).await;
        assert_eq!(got, SubscriptionStatus::CheckFailed);
    }
}
