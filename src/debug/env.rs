
const ROOT_PREFIX: &str = "PATHFILL";

pub(crate) mod svg {
    use std::{env, path};

    use crate::debug;

    const GROUP_PREFIX: &str = "SVG";

    pub(crate) fn output_path() -> Option<path::PathBuf> {
        const KEY: &str = "OUTPUT_PATH";
        let key = format!("{}_{}_{}", super::ROOT_PREFIX, GROUP_PREFIX, KEY);

        env::var(key).ok().map(path::PathBuf::from)
    }

    pub(crate) fn show_labels() -> bool {
        // Note the show/hide inversion
        const KEY: &str = "HIDE_LABELS";
        let key = format!("{}_{}_{}", super::ROOT_PREFIX, GROUP_PREFIX, KEY);

        env::var(key).is_err()
    }

    pub(crate) fn output_level() -> debug::svg::SvgOutputLevel {
        const KEY: &str = "OUTPUT_LEVEL";
        let key = format!("{}_{}_{}", super::ROOT_PREFIX, GROUP_PREFIX, KEY);

        use debug::svg::SvgOutputLevel;

        match env::var(key) {
            Ok(value) => {
                match value.trim() {
                    "0" => SvgOutputLevel::None,
                    "1" => SvgOutputLevel::ResultOnly,
                    _ => SvgOutputLevel::MajorSteps,
                }
            }
            // Setting the output path alone is enough to get every snapshot
            Err(_) => SvgOutputLevel::MajorSteps,
        }
    }
}
