//! Service layer for flotool
//!
//! Higher-level building blocks the tools are assembled from: the auth
//! proxy client, the authorization wait loop, git access, and push
//! execution.

pub mod authorize;
pub mod git;
pub mod proxy;
pub mod push;

pub use authorize::{wait_for_authorization, WaitConfig};
pub use git::{ChangeSummary, GitRepo};
pub use proxy::{AuthorizationOutcome, ProxyClient, RegistrationHelp};
pub use push::{CredentialSource, EnvCredentialSource, ProxyCredentialSource};
