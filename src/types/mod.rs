// ABOUTME: Identifier types shared by the runtime adapter and the normalizer.
// ABOUTME: Currently only container ids.

mod id;

pub use id::{ContainerId, SHORT_ID_LEN};
