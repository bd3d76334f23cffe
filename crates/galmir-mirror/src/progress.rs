use indicatif::{ProgressBar, ProgressStyle};
use once_cell::sync::Lazy;

pub trait Tracker {
    type Ctx: Clone;
    type Inc: Clone;
    fn new(ctx: Self::Ctx) -> Self;
    fn step(&self, step: Self::Inc) -> &Self;
    fn finish(&self, msg: Option<String>);
}

const PB_STYLE: &str =
    "{spinner:.blue} {msg:.cyan} [{elapsed_precise}] {wide_bar:.cyan/blue} {pos}/{len} ({per_sec}, {eta})";

const TICK: &str = "⠁⠂⠄⡀⢀⠠⠐⠈ ";

const PB_CHARS: &str = "█▓▒░  ";

static PB_TEMPLATE: Lazy<Option<ProgressStyle>> = Lazy::new(|| {
    ProgressStyle::with_template(PB_STYLE)
        .ok()
        .map(|style| style.tick_chars(TICK).progress_chars(PB_CHARS))
});

/// Per-album image counter.
pub struct AlbumProgress {
    pub pb: ProgressBar,
}

#[derive(Debug, Clone)]
pub struct AlbumProgressConfig {
    pub len:    u64,
    pub msg:    String,
    pub hidden: bool,
}

impl Tracker for AlbumProgress {
    type Ctx = AlbumProgressConfig;
    type Inc = u64;

    fn new(ctx: Self::Ctx) -> Self {
        let pb = if ctx.hidden {
            ProgressBar::hidden()
        } else {
            ProgressBar::new(ctx.len)
        };
        pb.set_length(ctx.len);

        let pb = match PB_TEMPLATE.as_ref() {
            Some(style) => pb.with_style(style.clone()),
            None => pb,
        };

        AlbumProgress {
            pb: pb.with_message(ctx.msg),
        }
    }

    fn step(&self, n: u64) -> &Self {
        self.pb.inc(n);
        self
    }

    fn finish(&self, msg: Option<String>) {
        match msg {
            Some(msg) => self.pb.finish_with_message(msg),
            None => self.pb.finish_and_clear(),
        }
    }
}
