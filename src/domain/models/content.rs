//! Static site content.
//!
//! Everything the pages render lives in these arrays; there is no backend.

use chrono::NaiveDate;

/// Skinned artwork, relative to `assets/images`.
pub const HOME_VISUAL: &str = "terracotta/home-visual.svg";
pub const THOUGHT_VISUAL: &str = "terracotta/thoughts/visual.svg";
pub const RECOMMENDATION_VISUAL: &str = "terracotta/recommendations/visual.svg";

/// Grid footprint of a project or recommendation tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileSize {
    Small,
    Medium,
    Large,
}

impl TileSize {
    pub fn class(&self) -> &'static str {
        match self {
            TileSize::Small => "c-tile--small",
            TileSize::Medium => "c-tile--medium",
            TileSize::Large => "c-tile--large",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThoughtSize {
    Normal,
    Wide,
    Tall,
    Large,
}

impl ThoughtSize {
    pub fn class(&self) -> &'static str {
        match self {
            ThoughtSize::Normal => "c-tile--normal",
            ThoughtSize::Wide => "c-tile--wide",
            ThoughtSize::Tall => "c-tile--tall",
            ThoughtSize::Large => "c-tile--large",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub size: TileSize,
    pub has_image: bool,
    pub image_only: bool,
    /// Markdown write-up shown on the detail page.
    pub body: &'static str,
}

impl Project {
    pub fn detail_path(&self) -> String {
        format!("/projects/{}", self.id)
    }

    /// Tile artwork, relative to `assets/images`.
    pub fn image(&self) -> String {
        format!("terracotta/projects/{}.svg", self.id)
    }
}

/// Smaller projects summarised on `/projects/other`.
#[derive(Debug, Clone, PartialEq)]
pub struct OtherProject {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub image_path: Option<&'static str>,
    pub university: bool,
    pub body: &'static str,
}

impl OtherProject {
    pub fn detail_path(&self) -> String {
        format!("/projects/{}", self.id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Thought {
    pub id: &'static str,
    pub title: &'static str,
    /// (year, month, day)
    pub published: (i32, u32, u32),
    pub summary: &'static str,
    pub tags: &'static [&'static str],
    pub size: ThoughtSize,
    pub visual_only: bool,
    pub body: &'static str,
}

impl Thought {
    pub fn date(&self) -> Option<NaiveDate> {
        let (year, month, day) = self.published;
        NaiveDate::from_ymd_opt(year, month, day)
    }

    /// "April 15, 2024"
    pub fn display_date(&self) -> String {
        self.date()
            .map(|date| date.format("%B %-d, %Y").to_string())
            .unwrap_or_default()
    }

    pub fn detail_path(&self) -> String {
        format!("/thoughts/{}", self.id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecommendationKind {
    Video,
    Book,
    Article,
    Visual,
}

impl RecommendationKind {
    pub fn label(&self) -> &'static str {
        match self {
            RecommendationKind::Video => "Video",
            RecommendationKind::Book => "Book",
            RecommendationKind::Article => "Article",
            RecommendationKind::Visual => "Visual",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub id: u32,
    pub kind: RecommendationKind,
    pub title: &'static str,
    pub link: &'static str,
    pub note: &'static str,
    pub size: TileSize,
    pub visual_only: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "GitHub", url: "https://github.com/lennardkaye" },
    SocialLink { label: "LinkedIn", url: "https://linkedin.com/in/lennardkaye" },
    SocialLink { label: "Twitter/X", url: "https://x.com/lennardkaye" },
    SocialLink { label: "Lichess", url: "https://lichess.org/@/lennardk" },
    SocialLink { label: "Goodreads", url: "https://www.goodreads.com/user/show/158337367-lennard" },
];

pub const PROJECTS: &[Project] = &[
    Project {
        id: "journaling-app",
        title: "Full Stack Journaling App",
        description: "A journaling app with prompt-driven entries, mood tracking and an AI reflection assistant.",
        tech: &["React", "TypeScript", "Supabase", "OpenAI API"],
        size: TileSize::Large,
        has_image: true,
        image_only: false,
        body: "## Architecture\n\nA React front end talks to Supabase for auth and storage. \
               Reflections are generated server-side so API keys never reach the browser.\n\n\
               ## Learnings\n\n- Row level security policies are the real data model.\n\
               - Streaming responses make long reflections feel instant.",
    },
    Project {
        id: "rag-playground",
        title: "SAP BTP RAG Playground",
        description: "Retrieval-augmented generation sandbox on SAP BTP for comparing chunking and retrieval strategies.",
        tech: &["Python", "SAP BTP", "HANA Vector Engine", "LangChain"],
        size: TileSize::Small,
        has_image: false,
        image_only: false,
        body: "A playground for comparing chunk sizes, embedding models and re-ranking \
               against the same document set, with every run logged for side-by-side review.",
    },
    Project {
        id: "data-platform",
        title: "Data Transformation Platform",
        description: "Interactive pipeline builder for cleaning and reshaping business datasets without code.",
        tech: &["D3.js", "React", "Firebase", "Material UI"],
        size: TileSize::Medium,
        has_image: false,
        image_only: false,
        body: "Pipelines are stored as a list of typed steps. Each step previews its output \
               on a sample so mistakes surface before the full dataset is processed.",
    },
    Project {
        id: "climate-calculator",
        title: "Climate Impact Calculator",
        description: "Tool for individuals and businesses to calculate and offset their carbon footprint.",
        tech: &["Vue.js", "Node.js", "Chart.js", "MongoDB"],
        size: TileSize::Medium,
        has_image: true,
        image_only: false,
        body: "Emission factors are versioned so past results stay reproducible when \
               the factor tables are updated.",
    },
    Project {
        id: "visual-experiment",
        title: "Visual Experiment",
        description: "",
        tech: &[],
        size: TileSize::Small,
        has_image: true,
        image_only: true,
        body: "",
    },
];

pub const OTHER_PROJECTS: &[OtherProject] = &[
    OtherProject {
        id: "agentic-sales-deck",
        title: "Agentic Sales Deck Generator",
        description: "LangGraph workflow that facilitates web search, reasoning, and vector retrieval to automatically create PowerPoint slides for sales decks.",
        tech: &["Python", "LangGraph", "PowerPoint API", "Vector DB"],
        image_path: Some("projects/agentic-sales1.svg"),
        university: false,
        body: "The agent plans the deck outline first, then fills each slide with \
               retrieved facts and cites the source next to every claim.",
    },
    OtherProject {
        id: "university-projects",
        title: "University Projects",
        description: "During my Masters I have completed additional projects on Applied Machine Learning, Business Data Processing and genAI Use Case Integration which are outlined here.",
        tech: &["Python", "Machine Learning", "Data Processing", "GenAI"],
        image_path: Some("projects/cbs.svg"),
        university: true,
        body: "- **Applied Machine Learning**: churn prediction with gradient boosted trees.\n\
               - **Business Data Processing**: streaming ETL for retail sales data.\n\
               - **GenAI Use Case Integration**: evaluation framework for internal copilots.",
    },
];

pub const THOUGHTS: &[Thought] = &[
    Thought {
        id: "1",
        title: "On Building Products People Love",
        published: (2024, 4, 15),
        summary: "Reflecting on the principles that guide exceptional product development - user-centered design, iterative processes, and finding the right balance between innovation and familiarity.",
        tags: &["Product Design", "UX"],
        size: ThoughtSize::Wide,
        visual_only: false,
        body: "Great products feel obvious in hindsight. Getting there is anything but.\n\n\
               ## Start from the user\n\nEvery iteration should answer a question a real user asked.",
    },
    Thought {
        id: "2",
        title: "The Evolution of Frontend Development",
        published: (2024, 3, 28),
        summary: "Tracking the significant shifts in frontend development from jQuery to modern frameworks, and exploring where we might be headed next.",
        tags: &["Frontend", "Web Development"],
        size: ThoughtSize::Normal,
        visual_only: false,
        body: "From DOM manipulation to declarative components to compiled reactivity: \
               each step moved more bookkeeping from the developer to the tool.",
    },
    Thought {
        id: "3",
        title: "AI Tools in My Daily Workflow",
        published: (2024, 3, 10),
        summary: "How I've incorporated various AI tools into my creative and development processes, and the impact they've had on productivity and creativity.",
        tags: &["AI", "Productivity"],
        size: ThoughtSize::Normal,
        visual_only: false,
        body: "Drafting, reviewing and summarising are where assistants help most. \
               Deciding what to build is still the hard part.",
    },
    Thought {
        id: "4",
        title: "Visual Inspiration",
        published: (2024, 2, 20),
        summary: "",
        tags: &[],
        size: ThoughtSize::Normal,
        visual_only: true,
        body: "",
    },
];

pub const RECOMMENDATIONS: &[Recommendation] = &[
    Recommendation {
        id: 1,
        kind: RecommendationKind::Video,
        title: "Karpathy - Intro to LLMs",
        link: "https://www.youtube.com/watch?v=zjkBMFhNj_g",
        note: "Excellent foundational overview of large language models, covering architecture and training fundamentals.",
        size: TileSize::Medium,
        visual_only: false,
    },
    Recommendation {
        id: 2,
        kind: RecommendationKind::Video,
        title: "Veritasium - Relativity",
        link: "https://www.youtube.com/@veritasium",
        note: "Makes complex physics accessible through excellent visualizations and clear explanations.",
        size: TileSize::Small,
        visual_only: false,
    },
    Recommendation {
        id: 3,
        kind: RecommendationKind::Book,
        title: "The Mom Test",
        link: "https://www.momtestbook.com",
        note: "Short, practical guide to asking customers questions that produce honest answers.",
        size: TileSize::Small,
        visual_only: false,
    },
    Recommendation {
        id: 4,
        kind: RecommendationKind::Article,
        title: "Paul Graham - Do Things That Don't Scale",
        link: "https://paulgraham.com/ds.html",
        note: "Still the best argument for doing the manual work early.",
        size: TileSize::Small,
        visual_only: false,
    },
    Recommendation {
        id: 5,
        kind: RecommendationKind::Visual,
        title: "Inspirational Reference",
        link: "#",
        note: "",
        size: TileSize::Large,
        visual_only: true,
    },
];

pub fn find_project(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|project| project.id == id)
}

pub fn find_other_project(id: &str) -> Option<&'static OtherProject> {
    OTHER_PROJECTS.iter().find(|project| project.id == id)
}

pub fn find_thought(id: &str) -> Option<&'static Thought> {
    THOUGHTS.iter().find(|thought| thought.id == id)
}

/// Every image file the pages reference, relative to `assets/images`.
pub fn referenced_images() -> Vec<String> {
    let mut images: Vec<String> = [HOME_VISUAL, THOUGHT_VISUAL, RECOMMENDATION_VISUAL]
        .iter()
        .map(|path| path.to_string())
        .collect();
    images.extend(
        PROJECTS
            .iter()
            .filter(|project| project.has_image || project.image_only)
            .map(Project::image),
    );
    images.extend(
        OTHER_PROJECTS
            .iter()
            .filter_map(|project| project.image_path.map(str::to_string)),
    );
    images
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_project_ids_are_unique_across_lists() {
        let mut ids = HashSet::new();
        for id in PROJECTS
            .iter()
            .map(|p| p.id)
            .chain(OTHER_PROJECTS.iter().map(|p| p.id))
        {
            assert!(ids.insert(id), "duplicate project id {}", id);
            // "other" is the summary page, never a project id.
            assert_ne!(id, "other");
        }
    }

    #[test]
    fn test_lookups() {
        assert_eq!(find_project("rag-playground").map(|p| p.size), Some(TileSize::Small));
        assert!(find_project("42").is_none());
        assert!(find_other_project("university-projects").unwrap().university);
        assert_eq!(find_thought("2").map(|t| t.title), Some("The Evolution of Frontend Development"));
        assert!(find_thought("99").is_none());
    }

    #[test]
    fn test_thought_dates() {
        let thought = find_thought("1").unwrap();
        assert_eq!(thought.display_date(), "April 15, 2024");
        for thought in THOUGHTS {
            assert!(thought.date().is_some(), "invalid date on thought {}", thought.id);
        }
    }

    #[test]
    fn test_detail_paths() {
        assert_eq!(PROJECTS[0].detail_path(), "/projects/journaling-app");
        assert_eq!(THOUGHTS[2].detail_path(), "/thoughts/3");
        assert_eq!(OTHER_PROJECTS[0].detail_path(), "/projects/agentic-sales-deck");
    }
}
