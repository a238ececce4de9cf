//! One synchronization store per domain resource.
//!
//! Every store pairs a [`ResourceState`](crate::store::ResourceState) with a
//! shared [`ApiClient`](crate::api::ApiClient) and exposes the operations its
//! backend endpoint supports. Operations record their lifecycle in the state
//! (begin / fulfill / fail) and additionally return a `Result` so callers can
//! branch without inspecting the state.

pub mod about;
pub mod award;
pub mod contact;
pub mod education;
pub mod experience;
pub mod message;
pub mod project;
pub mod tech_stack;
pub mod testimonial;
pub mod user;

pub use about::AboutStore;
pub use award::AwardStore;
pub use contact::ContactStore;
pub use education::EducationStore;
pub use experience::ExperienceStore;
pub use message::MessageStore;
pub use project::{ProjectFilter, ProjectStore};
pub use tech_stack::TechStackStore;
pub use testimonial::TestimonialStore;
pub use user::UserStore;

use crate::api::{ApiError, Envelope};
use crate::store::{Entity, ResourceState};

/// Applies a gateway outcome to a resource state: reconcile on success,
/// record the error (leaving cached data untouched) on failure.
pub(crate) fn apply<T, F>(
    state: &mut ResourceState<T>,
    outcome: Result<Envelope, ApiError>,
    reconcile: F,
) -> Result<(), ApiError>
where
    T: Entity + Clone,
    F: FnOnce(&mut ResourceState<T>, Envelope),
{
    match outcome {
        Ok(envelope) => {
            reconcile(state, envelope);
            Ok(())
        }
        Err(e) => {
            state.fail(e.to_string());
            Err(e)
        }
    }
}
