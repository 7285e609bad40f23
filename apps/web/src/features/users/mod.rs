pub(crate) mod client;

pub(crate) use client::BrowserDirectory;
