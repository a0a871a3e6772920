//! In-memory roster source
//!
//! Keeps one `tokio::sync::watch` channel per destination. Every write
//! replaces the roster held by the channel, and every open stream observes
//! the new snapshot. New subscribers receive the current roster first.
//!
//! Slow subscribers may skip intermediate snapshots; since each snapshot is
//! a complete roster, the latest one is always sufficient.

use adapter_core::{Adapter, AdapterInfo, AdapterKind};
use futures::StreamExt;
use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::MembershipsConfig;
use crate::domain::{DestinationType, Member, Membership};
use crate::error::MembershipsError;
use crate::ports::MembershipsAdapter;
use crate::stream::MembershipStream;

type DestinationKey = (DestinationType, String);

/// Memberships adapter backed by a process-local roster table.
pub struct InMemoryMembershipsAdapter {
    config: MembershipsConfig,
    destinations: RwLock<HashMap<DestinationKey, watch::Sender<Membership>>>,
}

impl InMemoryMembershipsAdapter {
    /// Create an empty adapter with default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::unchecked(MembershipsConfig::default())
    }

    /// Create an empty adapter with the given limits.
    pub fn with_config(config: MembershipsConfig) -> Result<Self, MembershipsError> {
        config.validate()?;
        Ok(Self::unchecked(config))
    }

    /// Create an empty adapter with limits read from the environment.
    pub fn from_env() -> Result<Self, MembershipsError> {
        Self::with_config(MembershipsConfig::from_env())
    }

    /// Create an adapter seeded from a JSON array of memberships.
    pub fn from_json(json: &str, config: MembershipsConfig) -> Result<Self, MembershipsError> {
        let memberships: Vec<Membership> =
            serde_json::from_str(json).map_err(|e| MembershipsError::Fixture(e.to_string()))?;

        let adapter = Self::with_config(config)?;
        for membership in memberships {
            adapter.set_membership(membership)?;
        }

        info!(
            adapter = %adapter.config.adapter_name,
            destinations = adapter.destination_count(),
            "Loaded roster fixtures"
        );
        Ok(adapter)
    }

    fn unchecked(config: MembershipsConfig) -> Self {
        Self {
            config,
            destinations: RwLock::new(HashMap::new()),
        }
    }

    /// Get the active configuration.
    #[must_use]
    pub fn config(&self) -> &MembershipsConfig {
        &self.config
    }

    /// Start tracking a destination with an empty roster and a fresh
    /// membership ID.
    pub fn create_destination(
        &self,
        destination_id: &str,
        destination_type: DestinationType,
    ) -> Result<Membership, MembershipsError> {
        validate_destination_id(destination_id)?;

        let membership = Membership::new(
            Uuid::new_v4().to_string(),
            destination_id,
            destination_type,
        );

        let mut destinations = self.destinations.write();
        let key = (destination_type, destination_id.to_string());
        if destinations.contains_key(&key) {
            return Err(MembershipsError::DestinationExists {
                id: destination_id.to_string(),
                destination_type,
            });
        }
        self.check_destination_capacity(destinations.len())?;

        let (sender, _) = watch::channel(membership.clone());
        destinations.insert(key, sender);

        debug!(destination_id, destination_type = %destination_type, "Destination created");
        Ok(membership)
    }

    /// Insert or replace the full roster of a destination.
    ///
    /// Member IDs must be unique within the roster.
    pub fn set_membership(&self, membership: Membership) -> Result<(), MembershipsError> {
        validate_destination_id(&membership.destination_id)?;
        self.check_member_capacity(membership.members.len())?;
        validate_unique_members(&membership.members)?;

        let key = (membership.destination_type, membership.destination_id.clone());
        let mut destinations = self.destinations.write();

        match destinations.get(&key) {
            Some(sender) => {
                debug!(
                    destination_id = %membership.destination_id,
                    members = membership.members.len(),
                    "Roster replaced"
                );
                sender.send_replace(membership);
            }
            None => {
                self.check_destination_capacity(destinations.len())?;
                debug!(
                    destination_id = %membership.destination_id,
                    members = membership.members.len(),
                    "Roster added"
                );
                let (sender, _) = watch::channel(membership);
                destinations.insert(key, sender);
            }
        }

        Ok(())
    }

    /// Replace the member with the same ID, or append it to the roster.
    pub fn upsert_member(
        &self,
        destination_id: &str,
        destination_type: DestinationType,
        member: Member,
    ) -> Result<(), MembershipsError> {
        let max = self.config.max_members_per_destination;
        let destinations = self.destinations.read();
        let sender = lookup(&destinations, destination_id, destination_type)?;

        let member_id = member.id.clone();
        let mut result = Ok(());
        sender.send_if_modified(|roster| {
            if let Some(existing) = roster.members.iter_mut().find(|m| m.id == member.id) {
                *existing = member;
                return true;
            }
            if roster.members.len() >= max {
                result = Err(MembershipsError::RosterFull {
                    count: roster.members.len() + 1,
                    max,
                });
                return false;
            }
            roster.members.push(member);
            true
        });

        if result.is_ok() {
            debug!(destination_id, member_id = %member_id, "Member upserted");
        }
        result
    }

    /// Remove a member from a roster.
    ///
    /// Returns whether a member was removed. Subscribers are only notified
    /// when the roster changed.
    pub fn remove_member(
        &self,
        destination_id: &str,
        destination_type: DestinationType,
        member_id: &str,
    ) -> Result<bool, MembershipsError> {
        let destinations = self.destinations.read();
        let sender = lookup(&destinations, destination_id, destination_type)?;

        let removed = sender.send_if_modified(|roster| {
            let before = roster.members.len();
            roster.members.retain(|m| m.id != member_id);
            roster.members.len() != before
        });

        if removed {
            debug!(destination_id, member_id, "Member removed");
        }
        Ok(removed)
    }

    /// Stop tracking a destination, ending all of its streams.
    ///
    /// Returns the last roster.
    pub fn remove_destination(
        &self,
        destination_id: &str,
        destination_type: DestinationType,
    ) -> Result<Membership, MembershipsError> {
        let sender = self
            .destinations
            .write()
            .remove(&(destination_type, destination_id.to_string()))
            .ok_or_else(|| not_found(destination_id, destination_type))?;

        debug!(
            destination_id,
            subscribers = sender.receiver_count(),
            "Destination removed"
        );
        let last = sender.borrow().clone();
        Ok(last)
    }

    /// Current roster of a destination, if tracked.
    #[must_use]
    pub fn current(
        &self,
        destination_id: &str,
        destination_type: DestinationType,
    ) -> Option<Membership> {
        self.destinations
            .read()
            .get(&(destination_type, destination_id.to_string()))
            .map(|sender| sender.borrow().clone())
    }

    /// Number of tracked destinations.
    #[must_use]
    pub fn destination_count(&self) -> usize {
        self.destinations.read().len()
    }

    /// Number of open streams for a destination.
    #[must_use]
    pub fn subscriber_count(&self, destination_id: &str, destination_type: DestinationType) -> usize {
        self.destinations
            .read()
            .get(&(destination_type, destination_id.to_string()))
            .map_or(0, watch::Sender::receiver_count)
    }

    fn check_member_capacity(&self, count: usize) -> Result<(), MembershipsError> {
        let max = self.config.max_members_per_destination;
        if count > max {
            return Err(MembershipsError::RosterFull { count, max });
        }
        Ok(())
    }

    fn check_destination_capacity(&self, tracked: usize) -> Result<(), MembershipsError> {
        let max = self.config.max_destinations;
        if tracked >= max {
            return Err(MembershipsError::TooManyDestinations {
                count: tracked + 1,
                max,
            });
        }
        Ok(())
    }
}

impl Default for InMemoryMembershipsAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl Adapter for InMemoryMembershipsAdapter {
    fn name(&self) -> &str {
        &self.config.adapter_name
    }

    fn kind(&self) -> AdapterKind {
        AdapterKind::Memberships
    }

    fn info(&self) -> AdapterInfo {
        AdapterInfo::new(self.name(), self.kind()).with_description("Process-local roster table")
    }
}

impl MembershipsAdapter for InMemoryMembershipsAdapter {
    fn get_members_from_destination(
        &self,
        destination_id: &str,
        destination_type: DestinationType,
    ) -> MembershipStream {
        if let Err(e) = validate_destination_id(destination_id) {
            return MembershipStream::failed(e);
        }

        let receiver = self
            .destinations
            .read()
            .get(&(destination_type, destination_id.to_string()))
            .map(watch::Sender::subscribe);

        let Some(receiver) = receiver else {
            debug!(destination_id, destination_type = %destination_type, "Subscribe to unknown destination");
            return MembershipStream::failed(not_found(destination_id, destination_type));
        };

        debug!(destination_id, destination_type = %destination_type, "New roster subscription");
        MembershipStream::new(WatchStream::new(receiver).map(Ok))
    }
}

fn lookup<'a>(
    destinations: &'a HashMap<DestinationKey, watch::Sender<Membership>>,
    destination_id: &str,
    destination_type: DestinationType,
) -> Result<&'a watch::Sender<Membership>, MembershipsError> {
    destinations
        .get(&(destination_type, destination_id.to_string()))
        .ok_or_else(|| not_found(destination_id, destination_type))
}

fn not_found(destination_id: &str, destination_type: DestinationType) -> MembershipsError {
    MembershipsError::DestinationNotFound {
        id: destination_id.to_string(),
        destination_type,
    }
}

fn validate_unique_members(members: &[Member]) -> Result<(), MembershipsError> {
    let mut seen = HashSet::with_capacity(members.len());
    for member in members {
        if !seen.insert(member.id.as_str()) {
            return Err(MembershipsError::DuplicateMember(member.id.clone()));
        }
    }
    Ok(())
}

fn validate_destination_id(destination_id: &str) -> Result<(), MembershipsError> {
    if destination_id.trim().is_empty() {
        return Err(MembershipsError::InvalidDestination(destination_id.to_string()));
    }
    Ok(())
}
