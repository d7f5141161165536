pub mod api;
pub mod controller;
pub mod notice;
pub mod render;

pub use api::{ClientError, HttpRoadmapApi, RoadmapApi, RoadmapReply, RoadmapRequest};
pub use controller::{FormController, FormState, SubmitOutcome};
pub use notice::{Notice, NoticeKind};
