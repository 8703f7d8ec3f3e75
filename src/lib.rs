//! Contact Desk - Client for a contact-management REST API
//!
//! This crate implements the client side of a user/contact/address service:
//! drafts validated field by field before anything is sent, one REST round
//! trip per operation, and a uniform success/failure handshake (status 200
//! or nothing) that ends in a notice and, on success, a navigation.
//!
//! # Layers
//!
//! - `domain` - Drafts, validation schemas, identifiers, routes
//! - `ports` - Resource clients, credential store, notifier, navigator
//! - `adapters` - `reqwest` client, file credential store, terminal and test adapters
//! - `application` - Form controllers and the session context
//! - `config` - Environment-driven configuration

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
