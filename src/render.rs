// SPDX-License-Identifier: MIT

//! Server-side page templates.

use tera::Tera;

/// Build the template registry. Templates are compiled into the binary
/// so rendering never depends on the working directory.
pub fn build_templates() -> tera::Result<Tera> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("base.html", include_str!("../templates/base.html")),
        ("index.html", include_str!("../templates/index.html")),
        ("top-tracks.html", include_str!("../templates/top-tracks.html")),
        (
            "playlist-generator.html",
            include_str!("../templates/playlist-generator.html"),
        ),
    ])?;
    Ok(tera)
}
