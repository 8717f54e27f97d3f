// SPDX-License-Identifier: MIT

//! Services module - Spotify Web API integration.

pub mod spotify;

pub use spotify::SpotifyClient;
