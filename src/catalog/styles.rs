use super::ImageStyle;

pub static IMAGE_STYLES: [ImageStyle; 10] = [
    ImageStyle {
        id: "neo-minimalism",
        name: "Neo-Minimalism",
        description: Some("Ultra-clean with bold typography and intentional whitespace. Reduces scroll fatigue, increases clarity."),
        look: Some("Ultra-clean, lots of whitespace, one focal element"),
        color_scheme: Some("Monochrome or two-tone with a single accent"),
        best_for: Some("Statements, announcements, product highlights"),
    },
    ImageStyle {
        id: "ai-generated-surrealism",
        name: "AI-Generated Surrealism",
        description: Some("Hyper-real or dreamlike visuals with fantasy vibes. Visually disruptive, very viral."),
        look: Some("Dreamlike, impossible scenes rendered hyper-real"),
        color_scheme: Some("Saturated, otherworldly gradients"),
        best_for: Some("Scroll-stopping concept posts"),
    },
    ImageStyle {
        id: "dark-mode-first",
        name: "Dark Mode First Design",
        description: Some("High contrast, sleek visuals on dark backgrounds. Aligns with phone dark modes."),
        look: Some("Sleek, high-contrast elements on a dark canvas"),
        color_scheme: Some("Near-black background with neon or bright accents"),
        best_for: Some("Tech, SaaS and developer content"),
    },
    ImageStyle {
        id: "cinematic-snapshots",
        name: "Cinematic Snapshots",
        description: Some("Images look like movie stills or moody film frames. Emotional storytelling, nostalgic vibes."),
        look: Some("Widescreen movie-still framing with film grain"),
        color_scheme: Some("Moody teal-and-orange or desaturated film tones"),
        best_for: Some("Storytelling and emotional hooks"),
    },
    ImageStyle {
        id: "3d-clay-blob-ui",
        name: "3D Clay & Blob UI Style",
        description: Some("Soft, playful 3D elements with pastel or matte textures. Friendly & futuristic."),
        look: Some("Soft rounded 3D shapes with matte clay texture"),
        color_scheme: Some("Pastels"),
        best_for: Some("Friendly product explainers"),
    },
    ImageStyle {
        id: "cyber-y2k",
        name: "Cyber Y2K Aesthetic",
        description: Some("Metallics, holographic gradients, pixel fonts. Appeals to Gen Z nostalgia."),
        look: Some("Chrome, holographic sheen, pixel accents"),
        color_scheme: Some("Iridescent silver, hot pink and electric blue"),
        best_for: Some("Youth-targeted and trend posts"),
    },
    ImageStyle {
        id: "handwritten-overlay",
        name: "Handwritten + Hand-Drawn Overlay",
        description: Some("Organic, personal scribbles or doodles over photos. Feels raw, authentic, human."),
        look: Some("Photos with marker doodles and handwritten notes"),
        color_scheme: Some("Natural photo tones with white or yellow ink"),
        best_for: Some("Personal stories, tips, behind the scenes"),
    },
    ImageStyle {
        id: "collage-mixed-media",
        name: "Collage & Mixed Media Revival",
        description: Some("Magazine-style cutouts, layering of textures/photos/graphics. Eye-catching, creative freedom."),
        look: Some("Layered cutouts, paper textures, tape and stickers"),
        color_scheme: Some("Eclectic, high-contrast mixes"),
        best_for: Some("Creative announcements and mood boards"),
    },
    ImageStyle {
        id: "infographic-micro-carousels",
        name: "Infographic Micro-Carousels",
        description: Some("Multi-slide explainers with bold type, icons, and color-coded sections. Boosts engagement."),
        look: Some("Bold type, icons, color-coded blocks"),
        color_scheme: Some("Brand palette with clear section colors"),
        best_for: Some("Educational and how-to posts"),
    },
    ImageStyle {
        id: "ai-enhanced-realism",
        name: "AI-Enhanced Realism",
        description: Some("Photos enhanced with AI (glow, art filters, background swaps). Unique outputs + storytelling flexibility."),
        look: Some("Realistic photography with subtle AI glow and filters"),
        color_scheme: Some("Natural tones with enhanced highlights"),
        best_for: Some("Lifestyle and product shots"),
    },
];

/// Typography guidance injected into image prompts, keyed by style id.
pub static STYLE_TYPOGRAPHY: [(&str, &str); 10] = [
    ("neo-minimalism", "Use a clean, bold sans-serif with generous letter spacing and strong hierarchy; keep text sparse and surrounded by whitespace."),
    ("ai-generated-surrealism", "Use striking display lettering that feels part of the dreamlike scene, with a soft glow or subtle distortion, while staying fully legible."),
    ("dark-mode-first", "Use crisp light or neon-colored type on the dark background with high contrast; favor modern geometric sans-serifs."),
    ("cinematic-snapshots", "Use cinematic title-card lettering: widely tracked uppercase serif or condensed sans, placed like movie credits or subtitles."),
    ("3d-clay-blob-ui", "Use rounded, puffy 3D lettering with a soft matte clay finish that matches the scene's pastel shapes."),
    ("cyber-y2k", "Use chrome or holographic Y2K lettering, pixel or techno display fonts with metallic gradients."),
    ("handwritten-overlay", "Use authentic handwritten marker or pen lettering, slightly imperfect, as if scribbled over the photo."),
    ("collage-mixed-media", "Use ransom-note style mixed lettering cut from magazines, with varied sizes and paper textures."),
    ("infographic-micro-carousels", "Use bold, highly legible sans-serif headlines with clear numbered or color-coded sections and icon accents."),
    ("ai-enhanced-realism", "Use elegant, minimal overlay text with a subtle drop shadow so it reads cleanly over the photograph."),
];
