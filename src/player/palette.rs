/// Player colors, handed out round-robin as players are added
pub const PALETTE: [&str; 12] = [
    "#f9d006", "#0070F3", "#50E3C2", "#7928CA", "#F5A623", "#FF0080", "#00E5FF", "#1DE9B6",
    "#76FF03", "#EEFF41", "#FF9E80", "#FF4081",
];

/// Round-robin cursor over [`PALETTE`].
///
/// The cursor only moves forward: removing a player or resetting the match
/// does not hand a color back.
#[derive(Debug, Clone, Default)]
pub struct Palette {
    cursor: usize,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_color(&mut self) -> &'static str {
        let color = PALETTE[self.cursor];
        self.cursor = (self.cursor + 1) % PALETTE.len();
        color
    }
}
