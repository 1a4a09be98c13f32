// Export scenarios: the canonical six-size container, the forced encoding
// fallback, standalone PNG previews, and a full no-argument run of the
// generate-icon binary.

use std::fs::File;
use std::process::Command;

use wavplayer_icongen::export::{self, ContainerWrite};
use wavplayer_icongen::icon::render;

#[test]
fn test_canonical_container_embeds_exactly_six_sizes() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let ico_path = dir.path().join("WavPlayer.ico");

    let canonical = [16u32, 32, 48, 64, 128, 256];
    let renders: Vec<_> = canonical.iter().map(|&s| render(s)).collect();

    let outcome =
        export::write_container_or_fallback(&ico_path, &renders).expect("write container");
    assert_eq!(outcome, ContainerWrite::MultiRes);

    let icon_dir =
        ico::IconDir::read(File::open(&ico_path).expect("open container")).expect("parse ico");
    let embedded: Vec<(u32, u32)> = icon_dir
        .entries()
        .iter()
        .map(|entry| (entry.width(), entry.height()))
        .collect();
    let expected: Vec<(u32, u32)> = canonical.iter().map(|&s| (s, s)).collect();
    assert_eq!(embedded, expected);

    // The largest render doubles as the standalone preview
    let preview_path = dir.path().join("icon_preview.png");
    export::write_png(&preview_path, renders.last().expect("non-empty render set"))
        .expect("write preview");
    let preview = image::open(&preview_path).expect("open preview").to_rgba8();
    assert_eq!((preview.width(), preview.height()), (256, 256));
}

#[test]
fn test_strict_container_rejects_oversized_entries() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let ico_path = dir.path().join("WavPlayer.ico");

    let err = export::write_container(&ico_path, &[render(512)]).unwrap_err();
    assert!(
        err.to_string().contains("limited to"),
        "error should name the entry limit: {}",
        err
    );
    assert!(
        !ico_path.exists(),
        "a failed container write must not leave a file behind"
    );
}

#[test]
fn test_oversized_entry_forces_single_48px_fallback() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let ico_path = dir.path().join("WavPlayer.ico");

    // 512 cannot be expressed by an ICO directory entry, so the full set
    // fails and the fallback policy kicks in
    let renders = vec![render(16), render(512)];
    let outcome =
        export::write_container_or_fallback(&ico_path, &renders).expect("fallback write");
    assert_eq!(outcome, ContainerWrite::Fallback);

    let icon_dir =
        ico::IconDir::read(File::open(&ico_path).expect("open container")).expect("parse ico");
    assert_eq!(icon_dir.entries().len(), 1);
    assert_eq!(icon_dir.entries()[0].width(), 48);
    assert_eq!(icon_dir.entries()[0].height(), 48);
}

#[test]
fn test_empty_render_set_is_rejected() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let ico_path = dir.path().join("WavPlayer.ico");

    let err = export::write_container(&ico_path, &[]).unwrap_err();
    assert!(
        err.to_string().contains("empty"),
        "error should name the empty set: {}",
        err
    );
}

#[test]
fn test_generate_icon_binary_writes_every_artifact() {
    let dir = tempfile::tempdir().expect("create temp dir");

    let output = Command::new(env!("CARGO_BIN_EXE_generate-icon"))
        .current_dir(dir.path())
        .output()
        .expect("run generate-icon");
    assert!(
        output.status.success(),
        "generate-icon failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    // One confirmation line per artifact, and the artifact itself on disk
    let stdout = String::from_utf8_lossy(&output.stdout);
    for artifact in ["WavPlayer.ico", "icon_preview.png", "icon_256.png", "icon_48.png"] {
        assert!(
            dir.path().join(artifact).exists(),
            "{} missing from the output directory",
            artifact
        );
        assert!(
            stdout.contains(artifact),
            "no confirmation line for {}",
            artifact
        );
    }

    let icon_dir = ico::IconDir::read(
        File::open(dir.path().join("WavPlayer.ico")).expect("open container"),
    )
    .expect("parse ico");
    let embedded: Vec<u32> = icon_dir.entries().iter().map(|entry| entry.width()).collect();
    assert_eq!(embedded, vec![16, 24, 32, 48, 64, 96, 128, 256]);

    let preview = image::open(dir.path().join("icon_preview.png"))
        .expect("open preview")
        .to_rgba8();
    assert_eq!((preview.width(), preview.height()), (512, 512));

    let about = image::open(dir.path().join("icon_256.png"))
        .expect("open icon_256")
        .to_rgba8();
    assert_eq!((about.width(), about.height()), (256, 256));

    let small = image::open(dir.path().join("icon_48.png"))
        .expect("open icon_48")
        .to_rgba8();
    assert_eq!((small.width(), small.height()), (48, 48));
}
