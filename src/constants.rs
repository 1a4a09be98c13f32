/// Fixed tunables for the WavPlayer icon artwork and export pass

pub mod palette {
    use image::Rgba;

    /// Dark blue-gray background panel
    pub const PANEL: Rgba<u8> = Rgba([25, 35, 50, 255]);

    /// Bright blue waveform stroke
    pub const WAVE: Rgba<u8> = Rgba([64, 156, 255, 255]);

    /// Light blue accent dots
    pub const ACCENT: Rgba<u8> = Rgba([100, 200, 255, 255]);

    /// Semi-transparent gray reference line through the vertical center
    pub const CENTER_LINE: Rgba<u8> = Rgba([80, 90, 110, 128]);
}

pub mod wave {
    /// Relative frequencies of the three sine components
    pub const FREQS: [f32; 3] = [1.0, 2.3, 0.7];

    /// Mixing weights; they sum to 1.0, so the combined amplitude never
    /// leaves [-1.0, 1.0]
    pub const WEIGHTS: [f32; 3] = [0.6, 0.25, 0.15];

    /// Phase sweep across the sample run (two full cycles of the base sine)
    pub const PHASE_SPAN: f32 = 4.0 * std::f32::consts::PI;

    /// Floor on the sample count so small icons stay legible
    pub const MIN_POINTS: u32 = 20;
}

pub mod sizes {
    /// Resolutions embedded in the icon container, ascending
    pub const CONTAINER: [u32; 8] = [16, 24, 32, 48, 64, 96, 128, 256];

    /// Full-resolution standalone preview
    pub const PREVIEW: u32 = 512;

    /// Mid-size icon written alone when container encoding fails
    pub const FALLBACK: u32 = 48;

    /// Accent dots appear at this edge length and above
    pub const DOT_THRESHOLD: u32 = 48;

    /// Largest edge an ICO directory entry can express
    pub const CONTAINER_LIMIT: u32 = 256;
}

pub mod output {
    /// Multi-resolution icon container consumed by the Windows build
    pub const ICO: &str = "WavPlayer.ico";

    /// Full-resolution preview image
    pub const PREVIEW_PNG: &str = "icon_preview.png";

    /// About-dialog icon
    pub const PNG_256: &str = "icon_256.png";

    /// Small-display icon (taskbar, tray)
    pub const PNG_48: &str = "icon_48.png";
}
