//! AuraKinetic Animation Primitives
//!
//! Frame-driven physics for pointer interactions. Both animators advance by
//! `step(dt)` and report when they have settled, so the host event loop owns
//! the frame pump and nothing here touches a timer or a thread.
//!
//! - **Momentum**: inertial deceleration after a drag release, with
//!   frame-rate-independent exponential friction and damped edge bounce
//! - **Spring**: RK4-integrated spring for programmatic glides to a target
//!   position (snap-backs, preset jumps)

pub mod momentum;
pub mod spring;

pub use momentum::{Momentum, MomentumConfig};
pub use spring::{Spring, SpringConfig};
