/// Visual style tables: attack-type and status-effect lookups.
/// Categories are closed enums with total lookup methods,
/// so style resolution can never fail at runtime.
///
/// A `Tint` is an abstract style token; mapping it to concrete
/// terminal colors is the renderer's job.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Hue {
    White,
    Grey,
    Red,
    Blue,
    SkyBlue,
    Cyan,
    Green,
    Yellow,
    Amber,
    Purple,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Tint {
    pub hue: Hue,
    pub bold: bool,
}

impl Tint {
    pub const fn plain(hue: Hue) -> Self {
        Tint { hue, bold: false }
    }

    pub const fn bold(hue: Hue) -> Self {
        Tint { hue, bold: true }
    }
}

// ── Attack types ──

/// Per-type visuals: particle glyph for streams, impact glyphs for
/// flashes (cycled in order), trail glyph left behind projectiles.
#[derive(Debug)]
pub struct AttackStyle {
    pub tint: Tint,
    pub particle: char,
    pub impact: &'static [char],
    pub trail: char,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AttackKind {
    Normal,
    Fire,
    Water,
    Plant,
    Electro,
    Ground,
    Stone,
    Ice,
    Flying,
    Poison,
    Undead,
}

static NORMAL: AttackStyle = AttackStyle {
    tint: Tint::plain(Hue::White),
    particle: '*',
    impact: &['*', 'x', '*'],
    trail: '.',
};
static FIRE: AttackStyle = AttackStyle {
    tint: Tint::bold(Hue::Red),
    particle: '~',
    impact: &['*', '⁂', '✦', '*'],
    trail: '°',
};
static WATER: AttackStyle = AttackStyle {
    tint: Tint::plain(Hue::Blue),
    particle: '~',
    impact: &['o', 'O', 'o'],
    trail: '·',
};
static PLANT: AttackStyle = AttackStyle {
    tint: Tint::plain(Hue::Green),
    particle: '#',
    impact: &['❋', '*', '❋'],
    trail: '·',
};
static ELECTRO: AttackStyle = AttackStyle {
    tint: Tint::bold(Hue::Yellow),
    particle: '⚡',
    impact: &['*', 'X', '*'],
    trail: '-',
};
static GROUND: AttackStyle = AttackStyle {
    tint: Tint::plain(Hue::Amber),
    particle: '▪',
    impact: &['■', '□', '■'],
    trail: '.',
};
static STONE: AttackStyle = AttackStyle {
    tint: Tint::plain(Hue::Grey),
    particle: '●',
    impact: &['◆', '◇', '◆'],
    trail: '·',
};
static ICE: AttackStyle = AttackStyle {
    tint: Tint::plain(Hue::Cyan),
    particle: '❄',
    impact: &['✦', '✧', '✦'],
    trail: '*',
};
static FLYING: AttackStyle = AttackStyle {
    tint: Tint::plain(Hue::SkyBlue),
    particle: '~',
    impact: &['≈', '~', '≈'],
    trail: '·',
};
static POISON: AttackStyle = AttackStyle {
    tint: Tint::plain(Hue::Purple),
    particle: '☠',
    impact: &['✗', 'X', '✗'],
    trail: '·',
};
static UNDEAD: AttackStyle = AttackStyle {
    tint: Tint::bold(Hue::Purple),
    particle: '☠',
    impact: &['✝', '†', '✝'],
    trail: '·',
};

impl AttackKind {
    pub const ALL: [AttackKind; 11] = [
        AttackKind::Normal,
        AttackKind::Fire,
        AttackKind::Water,
        AttackKind::Plant,
        AttackKind::Electro,
        AttackKind::Ground,
        AttackKind::Stone,
        AttackKind::Ice,
        AttackKind::Flying,
        AttackKind::Poison,
        AttackKind::Undead,
    ];

    /// Resolve a type name. Unknown names fall back to Normal.
    pub fn from_name(name: &str) -> Self {
        match name {
            "fire" => AttackKind::Fire,
            "water" => AttackKind::Water,
            "plant" => AttackKind::Plant,
            "electro" => AttackKind::Electro,
            "ground" => AttackKind::Ground,
            "stone" => AttackKind::Stone,
            "ice" => AttackKind::Ice,
            "flying" => AttackKind::Flying,
            "poison" => AttackKind::Poison,
            "undead" => AttackKind::Undead,
            _ => AttackKind::Normal,
        }
    }

    pub fn style(self) -> &'static AttackStyle {
        match self {
            AttackKind::Normal => &NORMAL,
            AttackKind::Fire => &FIRE,
            AttackKind::Water => &WATER,
            AttackKind::Plant => &PLANT,
            AttackKind::Electro => &ELECTRO,
            AttackKind::Ground => &GROUND,
            AttackKind::Stone => &STONE,
            AttackKind::Ice => &ICE,
            AttackKind::Flying => &FLYING,
            AttackKind::Poison => &POISON,
            AttackKind::Undead => &UNDEAD,
        }
    }

    #[allow(dead_code)]
    pub fn name(self) -> &'static str {
        match self {
            AttackKind::Normal => "normal",
            AttackKind::Fire => "fire",
            AttackKind::Water => "water",
            AttackKind::Plant => "plant",
            AttackKind::Electro => "electro",
            AttackKind::Ground => "ground",
            AttackKind::Stone => "stone",
            AttackKind::Ice => "ice",
            AttackKind::Flying => "flying",
            AttackKind::Poison => "poison",
            AttackKind::Undead => "undead",
        }
    }
}

// ── Status effects ──

/// Status effects with a recognized indicator visual.
/// Unlike attack types there is no generic fallback: an unknown
/// status name means "no animation", hence `from_name -> Option`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StatusKind {
    Paralyzation,
    Sleep,
    Burning,
    Poison,
    Confusion,
    Freezing,
}

impl StatusKind {
    pub const ALL: [StatusKind; 6] = [
        StatusKind::Paralyzation,
        StatusKind::Sleep,
        StatusKind::Burning,
        StatusKind::Poison,
        StatusKind::Confusion,
        StatusKind::Freezing,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "paralyzation" => Some(StatusKind::Paralyzation),
            "sleep" => Some(StatusKind::Sleep),
            "burning" => Some(StatusKind::Burning),
            "poison" => Some(StatusKind::Poison),
            "confusion" => Some(StatusKind::Confusion),
            "freezing" => Some(StatusKind::Freezing),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            StatusKind::Paralyzation => '⚡',
            StatusKind::Sleep => 'Z',
            StatusKind::Burning => '*',
            StatusKind::Poison => '☠',
            StatusKind::Confusion => '?',
            StatusKind::Freezing => '❄',
        }
    }

    pub fn tint(self) -> Tint {
        match self {
            StatusKind::Paralyzation => Tint::bold(Hue::Yellow),
            StatusKind::Sleep => Tint::plain(Hue::White),
            StatusKind::Burning => Tint::bold(Hue::Red),
            StatusKind::Poison => Tint::plain(Hue::Purple),
            StatusKind::Confusion => Tint::plain(Hue::SkyBlue),
            StatusKind::Freezing => Tint::plain(Hue::Cyan),
        }
    }
}
