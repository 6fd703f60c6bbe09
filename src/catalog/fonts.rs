use super::FontStyleOption;

pub const DEFAULT_FONT_STYLE_ID: &str = "minimalist-sans";

pub static FONT_STYLE_OPTIONS: [FontStyleOption; 6] = [
    FontStyleOption {
        id: "magazine-editorial",
        name: "Magazine Editorial",
        css_class: "font-serif",
        ai_description: "an elegant, bold, sophisticated magazine editorial font style, evoking fonts like Didot, Playfair Display, Butler, Cormorant Garamond, Canela, Editorial New, Noe Display, or Tan Pearl. Aim for bold headlines, possibly with small caps subtext, in a clean grid layout. Consider pairing a serif header with a sans-serif body.",
        details: Some("Elegant, Bold, Sophisticated. For luxury, fashion, statements."),
    },
    FontStyleOption {
        id: "minimalist-sans",
        name: "Minimalist Sans-Serif",
        css_class: "font-sans",
        ai_description: "a neutral, professional, clean minimalist sans-serif font style, similar to Helvetica Neue, Inter, Satoshi, Poppins, Neue Haas Grotesk, General Sans, or Aeonik. Suitable for clean UI posts, carousels, and startup branding.",
        details: Some("Neutral, Professional, Clean. For UI, carousels, startups."),
    },
    FontStyleOption {
        id: "retro-y2k",
        name: "Retro/Y2K/Vaporwave",
        css_class: "font-headline",
        ai_description: "a nostalgic, funky, eye-catching retro, Y2K, or vaporwave font style, reminiscent of GT Pressura, Space Grotesk, Monoton (for an 80s neon feel), Rubik Mono One, Stretch Pro, Bitcrusher, or Commodore 64 Pixel fonts. Good for vintage branding, youth-targeted posts, and memes.",
        details: Some("Nostalgic, Funky, Eye-catching. For vintage, youth, memes."),
    },
    FontStyleOption {
        id: "ghibli-fantasy",
        name: "Ghibli/Soft Fantasy",
        css_class: "font-serif",
        ai_description: "a whimsical, storybook, artistic soft fantasy-inspired font style, evoking Ghibli Fan Font, Lora, Quicksand, Recia Serif, Spectral, or Cardo. Ideal for story-driven posts, aesthetic journaling, and fantasy brands.",
        details: Some("Whimsical, Storybook, Artistic. For stories, journaling, fantasy."),
    },
    FontStyleOption {
        id: "handwritten-organic",
        name: "Handwritten/Organic",
        css_class: "font-sans",
        ai_description: "an authentic, playful, human handwritten or organic script font style, like Amatic SC, Shadows Into Light, Fredericka the Great, Kalam, or Pacifico, or an Architect's Daughter style. Use for quotes, captions, casual branding, and journaling.",
        details: Some("Authentic, Playful, Human. For quotes, casual branding."),
    },
    FontStyleOption {
        id: "futuristic-tech",
        name: "Futuristic/Tech",
        css_class: "font-mono",
        ai_description: "a modern, digital, sharp futuristic or tech font style, similar to Orbitron, Syncopate, Eurostile, Kode Mono, JetBrains Mono, or Rajdhani. Suited for tech startups, SaaS, crypto, and AI content.",
        details: Some("Modern, Digital, Sharp. For tech, SaaS, crypto, AI."),
    },
];
