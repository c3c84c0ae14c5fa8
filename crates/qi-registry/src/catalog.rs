//! Built-in component catalog.
//!
//! Source text lives next to this crate in `catalog/<slug>/` and is compiled
//! in. Definition order here is the order of the index page, the sidebar and
//! the registry API.

use std::sync::LazyLock;

use crate::record::{Category, ComponentRecord, ManualStep, Preview, SourceFile};
use crate::registry::Registry;

static BUILTIN: LazyLock<Registry> = LazyLock::new(|| Registry::new(definitions()));

impl Registry {
    /// The compiled-in catalog, built on first use.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }
}

const MOTION_LUCIDE: &str = "npm i motion lucide-react";
const REACT_TYPES: &[&str] = &["@types/react"];

const UTILS_SOURCE: &str = include_str!("../catalog/list/utils.ts");
const WAVE_SOURCE: &str = include_str!("../catalog/wave/source.tsx");
const LIST_SOURCE: &str = include_str!("../catalog/list/source.tsx");
const FEATURE_LIST_SOURCE: &str = include_str!("../catalog/featurelist/source.tsx");
const INFINITE_SCROLL_SOURCE: &str = include_str!("../catalog/infinitescroll/source.tsx");
const PLAN_SOURCE: &str = include_str!("../catalog/plan/source.tsx");
const CURSORS_SOURCE: &str = include_str!("../catalog/cursors/source.tsx");
const GRAPH_SOURCE: &str = include_str!("../catalog/graph/source.tsx");
const CALENDAR_SOURCE: &str = include_str!("../catalog/calendar/source.tsx");
const FULL_SCREEN_CALENDAR_SOURCE: &str =
    include_str!("../catalog/calendar/full-screen-calendar.tsx");
const LIQUID_BALL_SOURCE: &str = include_str!("../catalog/liquidball/source.tsx");
const GLASS_NAVBAR_SOURCE: &str = include_str!("../catalog/glassnavbar/source.tsx");
const LIQUID_GLASS_SOURCE: &str =
    include_str!("../catalog/glassnavbar/liquid-glass-background.tsx");

const fn install(command: &'static str) -> ManualStep {
    ManualStep {
        title: "Install dependencies",
        code: command,
        language: "bash",
        filename: None,
    }
}

const fn copy_source(filename: &'static str, code: &'static str) -> ManualStep {
    ManualStep {
        title: "Copy the source code",
        code,
        language: "tsx",
        filename: Some(filename),
    }
}

static LIST_STEPS: [ManualStep; 3] = [
    install("npm i motion @tabler/icons-react lucide-react clsx tailwind-merge"),
    ManualStep {
        title: "Add util file",
        code: UTILS_SOURCE,
        language: "tsx",
        filename: Some("lib/utils.ts"),
    },
    copy_source("components/ui/List.tsx", LIST_SOURCE),
];

static FEATURE_LIST_STEPS: [ManualStep; 2] = [
    install(MOTION_LUCIDE),
    copy_source("components/ui/FeatureList.tsx", FEATURE_LIST_SOURCE),
];

static INFINITE_SCROLL_STEPS: [ManualStep; 2] = [
    install(MOTION_LUCIDE),
    copy_source("components/ui/InfiniteScroll.tsx", INFINITE_SCROLL_SOURCE),
];

static PLAN_STEPS: [ManualStep; 2] = [
    install("npm i motion"),
    copy_source("components/ui/Plan.tsx", PLAN_SOURCE),
];

static CURSORS_STEPS: [ManualStep; 2] = [
    install(MOTION_LUCIDE),
    copy_source("components/ui/Cards/Cursors.tsx", CURSORS_SOURCE),
];

static WAVE_STEPS: [ManualStep; 2] = [
    install(MOTION_LUCIDE),
    copy_source("components/ui/Wave.tsx", WAVE_SOURCE),
];

static GRAPH_STEPS: [ManualStep; 2] = [
    install("npm i motion/react next-themes"),
    copy_source("components/ui/Graph.tsx", GRAPH_SOURCE),
];

static CALENDAR_STEPS: [ManualStep; 3] = [
    install("npm i react-day-picker date-fns lucide-react"),
    ManualStep {
        title: "Add the calendar primitive",
        code: CALENDAR_SOURCE,
        language: "tsx",
        filename: Some("components/ui/calendar.tsx"),
    },
    ManualStep {
        title: "Copy the full-screen calendar",
        code: FULL_SCREEN_CALENDAR_SOURCE,
        language: "tsx",
        filename: Some("components/ui/full-screen-calendar.tsx"),
    },
];

static LIQUID_BALL_STEPS: [ManualStep; 1] =
    [copy_source("components/ui/LiquidBall.tsx", LIQUID_BALL_SOURCE)];

static GLASS_NAVBAR_STEPS: [ManualStep; 2] = [
    ManualStep {
        title: "Create the GlassNavbar component",
        code: GLASS_NAVBAR_SOURCE,
        language: "tsx",
        filename: Some("src/registry/default/ui/GlassNavbar.tsx"),
    },
    ManualStep {
        title: "Create the LiquidGlassBackground component",
        code: LIQUID_GLASS_SOURCE,
        language: "tsx",
        filename: Some("src/registry/default/ui/liquidGlassBackground.tsx"),
    },
];

static LIST_FILES: [SourceFile; 1] = [SourceFile {
    path: "lib/utils.ts",
    content: UTILS_SOURCE,
}];

static CALENDAR_FILES: [SourceFile; 1] = [SourceFile {
    path: "components/ui/full-screen-calendar.tsx",
    content: FULL_SCREEN_CALENDAR_SOURCE,
}];

static GLASS_NAVBAR_FILES: [SourceFile; 1] = [SourceFile {
    path: "components/ui/liquidGlassBackground.tsx",
    content: LIQUID_GLASS_SOURCE,
}];

#[allow(clippy::too_many_lines)]
fn definitions() -> Vec<(&'static str, ComponentRecord)> {
    vec![
        (
            "list",
            ComponentRecord {
                name: "List",
                description: "A beautiful animated card component with hover effects and modern styling.",
                category: Category::Cards,
                preview: Preview::default_export("List"),
                demo_source: include_str!("../catalog/list/demo.tsx"),
                implementation_source: LIST_SOURCE,
                api_name: None,
                registry_path: "components/ui/list.tsx",
                extra_files: &LIST_FILES,
                cli_command: "npm i motion @tabler/icons-react lucide-react",
                manual_steps: &LIST_STEPS,
                dependencies: &[
                    "motion",
                    "@tabler/icons-react",
                    "lucide-react",
                    "clsx",
                    "tailwind-merge",
                ],
                dev_dependencies: REACT_TYPES,
                registry_dependencies: &[],
            },
        ),
        (
            "featurelist",
            ComponentRecord {
                name: "Feature List",
                description: "An interactive feature showcase with smooth animations and card transitions.",
                category: Category::Cards,
                preview: Preview::default_export("FeatureList"),
                demo_source: include_str!("../catalog/featurelist/demo.tsx"),
                implementation_source: FEATURE_LIST_SOURCE,
                api_name: Some("feature-list"),
                registry_path: "components/ui/feature-list.tsx",
                extra_files: &[],
                cli_command: "npx shadcn@latest add https://qi.kanakk.me/r/feature-list.json",
                manual_steps: &FEATURE_LIST_STEPS,
                dependencies: &["motion", "lucide-react"],
                dev_dependencies: REACT_TYPES,
                registry_dependencies: &[],
            },
        ),
        (
            "infinitescroll",
            ComponentRecord {
                name: "Infinite Scroll",
                description: "A smooth infinite scrolling component with animated content and hover interactions.",
                category: Category::Cards,
                preview: Preview::default_export("InfiniteScroll"),
                demo_source: include_str!("../catalog/infinitescroll/demo.tsx"),
                implementation_source: INFINITE_SCROLL_SOURCE,
                api_name: Some("infinite-scroll"),
                registry_path: "components/ui/infinite-scroll.tsx",
                extra_files: &[],
                cli_command: MOTION_LUCIDE,
                manual_steps: &INFINITE_SCROLL_STEPS,
                dependencies: &["motion", "lucide-react"],
                dev_dependencies: REACT_TYPES,
                registry_dependencies: &[],
            },
        ),
        (
            "plan",
            ComponentRecord {
                name: "Plan Card",
                description: "A pricing plan card with hover animations and feature reveal effects.",
                category: Category::Cards,
                preview: Preview::named("Plan", "Card"),
                demo_source: include_str!("../catalog/plan/demo.tsx"),
                implementation_source: PLAN_SOURCE,
                api_name: None,
                registry_path: "components/ui/plan.tsx",
                extra_files: &[],
                cli_command: "npm i motion",
                manual_steps: &PLAN_STEPS,
                dependencies: &["motion"],
                dev_dependencies: REACT_TYPES,
                registry_dependencies: &[],
            },
        ),
        (
            "cursors",
            ComponentRecord {
                name: "Cursors",
                description: "An interactive cursor tracking demo with smooth mouse following animations.",
                category: Category::Cards,
                preview: Preview::default_export("Cursors"),
                demo_source: include_str!("../catalog/cursors/demo.tsx"),
                implementation_source: CURSORS_SOURCE,
                api_name: None,
                registry_path: "components/ui/cursors.tsx",
                extra_files: &[],
                cli_command: MOTION_LUCIDE,
                manual_steps: &CURSORS_STEPS,
                dependencies: &["motion", "lucide-react"],
                dev_dependencies: REACT_TYPES,
                registry_dependencies: &["utils"],
            },
        ),
        (
            "wave",
            ComponentRecord {
                name: "Wave",
                description: "An interactive wave animation component with smooth hover effects and dynamic wave patterns.",
                category: Category::Animations,
                preview: Preview::default_export("Wave"),
                demo_source: include_str!("../catalog/wave/demo.tsx"),
                implementation_source: WAVE_SOURCE,
                api_name: None,
                registry_path: "components/ui/wave.tsx",
                extra_files: &[],
                cli_command: MOTION_LUCIDE,
                manual_steps: &WAVE_STEPS,
                dependencies: &["motion", "lucide-react"],
                dev_dependencies: REACT_TYPES,
                registry_dependencies: &[],
            },
        ),
        (
            "graph",
            ComponentRecord {
                name: "Graph",
                description: "An interactive data visualization component with animated charts and dark mode support.",
                category: Category::Cards,
                preview: Preview::default_export("Graph"),
                demo_source: include_str!("../catalog/graph/demo.tsx"),
                implementation_source: GRAPH_SOURCE,
                api_name: None,
                registry_path: "components/ui/graph.tsx",
                extra_files: &[],
                cli_command: "npm i motion/react next-themes",
                manual_steps: &GRAPH_STEPS,
                dependencies: &["motion", "next-themes"],
                dev_dependencies: REACT_TYPES,
                registry_dependencies: &[],
            },
        ),
        (
            "calendar",
            ComponentRecord {
                name: "Calendar",
                description: "A beautiful full-screen calendar component with event management and responsive design.",
                category: Category::Widgets,
                preview: Preview::named("Calendar", "FullScreenCalendar"),
                demo_source: include_str!("../catalog/calendar/demo.tsx"),
                implementation_source: CALENDAR_SOURCE,
                api_name: None,
                registry_path: "components/ui/calendar.tsx",
                extra_files: &CALENDAR_FILES,
                cli_command: "npx shadcn@latest add https://qi.kanakk.me/r/calendar.json",
                manual_steps: &CALENDAR_STEPS,
                dependencies: &["react-day-picker", "date-fns", "lucide-react"],
                dev_dependencies: REACT_TYPES,
                registry_dependencies: &["button"],
            },
        ),
        (
            "liquidball",
            ComponentRecord {
                name: "Liquid Ball",
                description: "A canvas-drawn liquid fill gauge with rippling waves and a draggable level.",
                category: Category::Animations,
                preview: Preview::default_export("LiquidBall"),
                demo_source: include_str!("../catalog/liquidball/demo.tsx"),
                implementation_source: LIQUID_BALL_SOURCE,
                api_name: None,
                registry_path: "components/ui/liquid-ball.tsx",
                extra_files: &[],
                cli_command: "npx shadcn@latest add https://qi.kanakk.me/r/liquidball.json",
                manual_steps: &LIQUID_BALL_STEPS,
                dependencies: &[],
                dev_dependencies: REACT_TYPES,
                registry_dependencies: &[],
            },
        ),
        (
            "glassnavbar",
            ComponentRecord {
                name: "Glass Navbar",
                description: "A modern glassmorphism navbar with liquid glass animation effects and smooth scroll interactions.",
                category: Category::Widgets,
                preview: Preview::default_export("GlassNavbar"),
                demo_source: include_str!("../catalog/glassnavbar/demo.tsx"),
                implementation_source: GLASS_NAVBAR_SOURCE,
                api_name: Some("glass-navbar"),
                registry_path: "components/ui/glass-navbar.tsx",
                extra_files: &GLASS_NAVBAR_FILES,
                cli_command: "npx shadcn@latest add https://qi.kanakk.me/r/glass-navbar.json",
                manual_steps: &GLASS_NAVBAR_STEPS,
                dependencies: &["motion", "next"],
                dev_dependencies: REACT_TYPES,
                registry_dependencies: &[],
            },
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::ComponentManifest;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtin_has_no_inconsistencies() {
        let problems: Vec<String> = Registry::builtin().check().iter().map(ToString::to_string).collect();
        assert_eq!(problems, Vec::<String>::new());
    }

    #[test]
    fn test_builtin_slugs_in_definition_order() {
        let slugs: Vec<_> = Registry::builtin().slugs().collect();
        assert_eq!(
            slugs,
            vec![
                "list",
                "featurelist",
                "infinitescroll",
                "plan",
                "cursors",
                "wave",
                "graph",
                "calendar",
                "liquidball",
                "glassnavbar",
            ]
        );
    }

    #[test]
    fn test_builtin_records_have_names_and_steps() {
        for summary in Registry::builtin().list() {
            assert!(!summary.record.name.is_empty(), "{} has no name", summary.slug);
            if let Some(steps) = summary.record.steps() {
                assert!(!steps.is_empty());
            }
        }
    }

    #[test]
    fn test_sources_start_with_client_directive() {
        for summary in Registry::builtin().list() {
            assert!(
                summary.record.implementation_source.starts_with("\"use client\""),
                "{} source lacks the client directive",
                summary.slug
            );
        }
    }

    #[test]
    fn test_wave_record() {
        let wave = Registry::builtin().get("wave").unwrap();
        assert_eq!(wave.registry_path, "components/ui/wave.tsx");
        assert_eq!(wave.manual_steps.len(), 2);
        assert_eq!(wave.manual_steps[1].code, wave.implementation_source);
        assert_eq!(wave.manual_steps[1].filename, Some("components/ui/Wave.tsx"));
    }

    #[test]
    fn test_published_names_keep_public_urls() {
        let registry = Registry::builtin();
        for (name, slug) in [
            ("feature-list", "featurelist"),
            ("infinite-scroll", "infinitescroll"),
            ("glass-navbar", "glassnavbar"),
        ] {
            let manifest = ComponentManifest::lookup(registry, name).unwrap();
            assert_eq!(manifest.name, name);
            assert_eq!(registry.get_published(name).unwrap().slug, slug);
        }
    }

    #[test]
    fn test_install_commands_resolve_to_manifests() {
        let registry = Registry::builtin();
        for summary in registry.list() {
            let command = summary.record.cli_command;
            let Some(url) = command.strip_prefix("npx shadcn@latest add https://qi.kanakk.me/r/")
            else {
                continue;
            };
            let name = url.strip_suffix(".json").unwrap();
            assert_eq!(name, summary.api_name(), "{command}");
            assert!(ComponentManifest::lookup(registry, name).is_some(), "{command}");
        }
        assert_eq!(
            registry.get("glassnavbar").unwrap().cli_command,
            "npx shadcn@latest add https://qi.kanakk.me/r/glass-navbar.json"
        );
        assert_eq!(
            registry.get("featurelist").unwrap().cli_command,
            "npx shadcn@latest add https://qi.kanakk.me/r/feature-list.json"
        );
    }

    #[test]
    fn test_plan_preview_uses_named_export() {
        let plan = Registry::builtin().get("plan").unwrap();
        assert_eq!(plan.preview, Preview::named("Plan", "Card"));
    }

    #[test]
    fn test_every_category_is_populated() {
        for category in Category::ALL {
            assert!(
                Registry::builtin().list().any(|s| s.record.category == category),
                "no component in {category:?}"
            );
        }
    }
}
