//! Password generation from selectable character classes.
//!
//! [`pass`] holds the generator itself: a pure function from a
//! [`pass::GenerationRequest`] to a [`pass::Password`] that contains at least
//! one character of every enabled class. [`form`] is the stateful caller the
//! terminal front ends drive, and [`entropy`] picks the random source.

pub mod entropy;
pub mod form;
pub mod pass;
