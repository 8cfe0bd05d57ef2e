//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (identifiers, errors)
//! - `skier` - Skier entity and derived age
//! - `course` - Course entity, category eligibility policy, support medium
//! - `registration` - Registration record, admission outcomes, capacity guard
//! - `subscription` - Subscription entity and validity-window arithmetic
//! - `instructor` - Instructor entity for the taught-weeks query

pub mod course;
pub mod foundation;
pub mod instructor;
pub mod registration;
pub mod skier;
pub mod subscription;
