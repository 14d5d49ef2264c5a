use crate::domain::model::Direction;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Typed surface of the external robot API. The HTTP implementation lives
/// in `core::client`; tests substitute scripted fakes.
#[async_trait]
pub trait RobotApi: Send + Sync {
    /// `POST /` with the contact email; returns the new robot id.
    async fn create_robot(&self, email: &str) -> Result<String>;

    /// `PUT /{id}/move`; returns the distance the server actually granted.
    /// Partial movement is not interpreted here, the caller decides what a
    /// short or zero result means.
    async fn move_robot(&self, id: &str, direction: Direction, distance: u32) -> Result<u32>;

    /// `PUT /{id}/escape`; returns whether the escape was granted. A
    /// denied escape is a normal result, not an error.
    async fn escape(&self, id: &str) -> Result<bool>;
}

/// Sink for user-visible progress. The navigator narrates through this
/// instead of printing directly, so the procedures stay testable.
pub trait ProgressSink: Send + Sync {
    /// One completed move: the direction and the distance the server
    /// reported (zero when blocked).
    fn moved(&self, direction: Direction, distance: u32);

    /// Milestone line: robot id, hall dimensions, escape outcome.
    fn event(&self, message: &str);
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn email(&self) -> &str;
    fn retry_max(&self) -> u32;
    /// Disable TLS certificate verification. Must stay off unless the
    /// operator explicitly opts in for a self-signed test endpoint.
    fn insecure(&self) -> bool;
}
