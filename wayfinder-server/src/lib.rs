//! Multi-modal route planner for a shared virtual world.
//!
//! Answers: "what is the fastest way from here to there, given the rail
//! network, the ice highways, and my own two feet?"

pub mod dataset;
pub mod distance;
pub mod domain;
pub mod engine;
pub mod graph;
pub mod mapview;
pub mod names;
pub mod planner;
pub mod web;
