use super::Niche;

pub static NICHES: [Niche; 4] = [
    Niche {
        id: "web-dev",
        name: "Web Development",
        icon: "code-xml",
        description: "Craft visuals for modern websites and cutting-edge applications.",
        prompt_hint: r#"e.g., "minimalist dashboard UI", "abstract code background""#,
    },
    Niche {
        id: "lead-gen",
        name: "Lead Generation",
        icon: "target",
        description: "Design compelling imagery to attract and convert potential customers.",
        prompt_hint: r#"e.g., "dynamic sales funnel graphic", "user persona collage""#,
    },
    Niche {
        id: "ai-solutions",
        name: "AI Solutions",
        icon: "brain-circuit",
        description: "Illustrate complex AI concepts and futuristic technology.",
        prompt_hint: r#"e.g., "neural network visualization", "AI robot assistant""#,
    },
    Niche {
        id: "motivation",
        name: "Motivation & Inspiration",
        icon: "flame",
        description: "Fuel ambition with powerful visuals for drive, success, and an 'alpha' mindset.",
        prompt_hint: r#"e.g., "alpha male silhouette sunrise", "inspirational quote on epic background", "person overcoming adversity""#,
    },
];
