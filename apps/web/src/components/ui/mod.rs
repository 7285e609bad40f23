mod alert;
mod loading;

pub(crate) use alert::{Alert, AlertKind};
pub(crate) use loading::{LoadingText, SkeletonGrid};
