use std::{ collections::BTreeMap, fmt, path::Path, sync::Arc };

use crate::types::{ FontFace, StandardFont, TrueTypeFont };

/// logical name for body text
pub const BODY_FONT: &str = "SegoeUI";
/// logical name for titles and headings
pub const BOLD_FONT: &str = "SegoeUI-Bold";
/// logical name for bullet and code text
pub const CODE_FONT: &str = "Consolas";

/// logical font names and the file names probed for each, in order
pub const FONT_CANDIDATES: [(&str, &[&str]); 3] = [
    (BODY_FONT, &["segoeui.ttf", "SegoeUI.ttf"]),
    (BOLD_FONT, &["segoeuib.ttf", "segoeuibd.ttf"]),
    (CODE_FONT, &["consola.ttf", "Consola.ttf"]),
];

/// why a single candidate file could not be registered
#[derive(Debug)]
pub enum FontProblem {
    Missing,
    Unreadable(std::io::Error),
    Unsupported(ttf_parser::FaceParsingError),
}

impl fmt::Display for FontProblem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FontProblem::Missing => write!(f, "file not found"),
            FontProblem::Unreadable(e) => write!(f, "unreadable: {e}"),
            FontProblem::Unsupported(e) => write!(f, "not a usable TrueType font: {e}"),
        }
    }
}

/// Which optional fonts were found for this build. Owned by the build context and
/// read-only once styles have been created.
#[derive(Debug,Default)]
pub struct FontRegistration {
    fonts: BTreeMap<String, Arc<TrueTypeFont>>,
}

impl FontRegistration {
    pub fn new() -> Self {
        FontRegistration::default()
    }

    /// probes every entry of `FONT_CANDIDATES` in `font_dir`
    pub fn discover(font_dir: &Path) -> Self {
        let mut registration = FontRegistration::new();

        for (name, filenames) in FONT_CANDIDATES.iter() {
            if !registration.register_font_if_exists(font_dir, name, filenames) {
                log::warn!("font {name} not available in {}, using a standard font", font_dir.display());
            }
        }

        registration
    }

    /// tries each of `filenames` inside `font_dir` and registers the first one that loads
    /// under `name`. A missing or broken file is never an error, the caller falls back instead.
    pub fn register_font_if_exists(&mut self, font_dir: &Path, name: &str, filenames: &[&str]) -> bool {
        for filename in filenames {
            let path = font_dir.join(filename);

            match Self::load(name, &path) {
                Ok(font) => {
                    log::info!("registered font {name} from {}", path.display());
                    self.fonts.insert(name.to_string(), Arc::new(font));
                    return true;
                },
                Err(problem) => {
                    log::debug!("skipping {} for {name}: {problem}", path.display());
                }
            }
        }

        false
    }

    fn load(name: &str, path: &Path) -> Result<TrueTypeFont, FontProblem> {
        if !path.is_file() {
            return Err(FontProblem::Missing);
        }

        let data = std::fs::read(path).map_err(FontProblem::Unreadable)?;

        TrueTypeFont::parse(name, data).map_err(FontProblem::Unsupported)
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.fonts.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Arc<TrueTypeFont>> {
        self.fonts.get(name)
    }

    /// registered logical names in sorted order
    pub fn registered_names(&self) -> impl Iterator<Item = &str> {
        self.fonts.keys().map(String::as_str)
    }

    /// first registered font in `chain`, otherwise `fallback`
    pub fn resolve(&self, chain: &[&str], fallback: StandardFont) -> FontFace {
        chain
            .iter()
            .find_map(|name| self.fonts.get(*name))
            .map(|font| FontFace::TrueType(Arc::clone(font)))
            .unwrap_or(FontFace::Standard(fallback))
    }
}
