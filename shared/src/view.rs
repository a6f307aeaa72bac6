use strum_macros::{AsRefStr, Display, EnumIter};

/// Display category a result view is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Segment {
    Success,
    Warning,
    Error,
}

/// The four fixed outcomes a submission can end in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum ResultView {
    Spam,
    NotSpam,
    Error,
    RateLimited,
}

impl ResultView {
    pub fn for_verdict(spam: bool) -> Self {
        if spam { Self::Spam } else { Self::NotSpam }
    }

    pub fn segment(self) -> Segment {
        match self {
            Self::Spam => Segment::Error,
            Self::NotSpam => Segment::Success,
            Self::Error | Self::RateLimited => Segment::Warning,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Spam => "This message is spam :(",
            Self::NotSpam => "This message is not spam :)",
            Self::Error => "An unexpected error occurred. Please try again later.",
            Self::RateLimited => "The server is too busy. Please try again later.",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Spam => "thumbs down",
            Self::NotSpam => "thumbs up",
            Self::Error | Self::RateLimited => "warning",
        }
    }
}
