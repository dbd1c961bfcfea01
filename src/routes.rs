//! Route definitions for the application

use dioxus::prelude::*;

use crate::pages::{Audio, Home, Image, SignIn, Text, ThreeD, Video, Workflows};

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},

    #[route("/image")]
    Image {},

    #[route("/video")]
    Video {},

    #[route("/audio")]
    Audio {},

    #[route("/3d")]
    ThreeD {},

    #[route("/text")]
    Text {},

    #[route("/workflows")]
    Workflows {},

    #[route("/auth/signin")]
    SignIn {},
}
