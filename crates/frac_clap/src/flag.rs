use frac_error::substr_edit_distance;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Flag {
    Help,
    Version,
    NoColor,
    Width,
    Decimal,
    Eval,
}

pub const FLAGS: [Flag; 6] = [
    Flag::Help,
    Flag::Version,
    Flag::NoColor,
    Flag::Width,
    Flag::Decimal,
    Flag::Eval,
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ArgKind {
    None,
    Int,
    Expr,
}

impl Flag {
    /// what kind of param this flag takes
    pub fn param_type(&self) -> ArgKind {
        match self {
            Flag::Width => ArgKind::Int,
            Flag::Eval => ArgKind::Expr,
            Flag::Help
            | Flag::Version
            | Flag::NoColor
            | Flag::Decimal => ArgKind::None,
        }
    }

    pub fn short(&self) -> Option<&'static str> {
        match self {
            Flag::Help => Some("-h"),
            Flag::Version => Some("-v"),
            Flag::Width => Some("-w"),
            Flag::NoColor
            | Flag::Decimal
            | Flag::Eval => None,
        }
    }

    pub fn long(&self) -> &'static str {
        match self {
            Flag::Help => "--help",
            Flag::Version => "--version",
            Flag::NoColor => "--no-color",
            Flag::Width => "--width",
            Flag::Decimal => "--decimal",
            Flag::Eval => "--eval",
        }
    }

    pub fn from_arg(arg: &str) -> Option<Flag> {
        FLAGS.iter().find(
            |flag| flag.long() == arg || flag.short() == Some(arg)
        ).copied()
    }

    // it catches typos
    //  --xx -> --no-color  (no sense)
    //  --widht -> --width  (makes sense)
    pub fn similar_flag(arg: &str) -> Option<Flag> {
        let mut closest_flag = None;
        let mut closest_dist = usize::MAX;

        for flag in FLAGS.iter() {
            let dist = substr_edit_distance(arg.as_bytes(), flag.long().as_bytes());

            if dist < closest_dist {
                closest_dist = dist;
                closest_flag = Some(*flag);
            }
        }

        if (arg.len() > 4 && closest_dist < 3) || closest_dist < 2 {
            closest_flag
        }

        else {
            None
        }
    }
}

impl ArgKind {
    pub fn render(&self) -> &'static str {
        match self {
            ArgKind::None => "nothing",
            ArgKind::Int => "an integer",
            ArgKind::Expr => "an expression",
        }
    }
}
