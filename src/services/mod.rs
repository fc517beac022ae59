//! Service layer modules for external integrations.
//!
//! Contains the client for the hosted auth collaborator (Supabase).

pub mod supabase;

pub use supabase::{SignupOutcome, SupabaseAuth};
