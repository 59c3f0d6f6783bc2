//! 欢迎语与项目介绍生成
//!
//! 从固定词表中随机拼装文案，随机源由调用方注入。

use rand::Rng;
use rand::seq::SliceRandom;

const PROJECT_KEYWORDS: [&str; 4] = ["project", "work", "portfolio", "experience"];

const PROJECT_TITLES: [&str; 6] = [
    "AI-Powered Chat Interface",
    "Machine Learning Pipeline",
    "Full-Stack Web Application",
    "Data Visualization Dashboard",
    "Cloud-Native Solution",
    "Generative AI Project",
];

const PROJECT_VERBS: [&str; 10] = [
    "showcases",
    "demonstrates",
    "highlights",
    "exemplifies",
    "showcases my expertise in",
    "is a testament to my skills in",
    "illustrates my proficiency with",
    "embodies my approach to",
    "showcases innovative use of",
    "demonstrates practical application of",
];

const PROJECT_ASPECTS: [&str; 15] = [
    "modern web development",
    "AI/ML integration",
    "scalable architecture",
    "user-centric design",
    "real-time data processing",
    "cloud-native solutions",
    "responsive interfaces",
    "data visualization",
    "API development",
    "machine learning workflows",
    "natural language processing",
    "computer vision",
    "generative AI",
    "large language models",
    "MERN stack development",
];

const PROJECT_IMPACTS: [&str; 10] = [
    "delivering exceptional user experiences",
    "solving complex technical challenges",
    "pushing the boundaries of what's possible",
    "creating efficient and maintainable code",
    "leveraging cutting-edge technologies",
    "transforming ideas into reality",
    "bridging the gap between concept and execution",
    "delivering robust and scalable solutions",
    "creating intuitive user interfaces",
    "optimizing performance and efficiency",
];

const GREETINGS: [&str; 5] = [
    "Hello there! I'm SaumikBot, your guide to Saumik's portfolio.",
    "Hi! I'm here to tell you about Saumik's work and expertise in AI and development.",
    "Greetings! I'm SaumikBot, here to showcase Saumik's technical journey and projects.",
    "Welcome! I'm SaumikBot, here to highlight Saumik's skills and experience in technology.",
    "Hey! I'm SaumikBot, your virtual guide to Saumik's professional portfolio.",
];

const CAPABILITIES: [&str; 5] = [
    "I can tell you about his projects, technical skills, and experience in AI and software development.",
    "Ask me about his work with machine learning, web development, or any of his technical projects.",
    "I'm here to provide insights into his expertise in building intelligent systems and applications.",
    "Feel free to ask about his technical stack, project challenges, or professional background.",
    "I can share details about his approach to problem-solving and technical implementation.",
];

const INTRO_PREFIXES: [&str; 10] = [
    "I'm Saumik, ",
    "Hey, I'm Saumik, ",
    "Hi there! I'm Saumik, ",
    "Hello! Saumik here, ",
    "Yo! Saumik here, ",
    "Greetings, I'm Saumik, ",
    "Saumik here, ",
    "Hi, Saumik here, ",
    "What's up? I'm Saumik, ",
    "Namaste! I'm Saumik, ",
];

const INTRO_ROLES: [&str; 14] = [
    "an AI engineer",
    "a machine learning engineer",
    "a deep learning practitioner",
    "a generative AI developer",
    "an LLM and RAG specialist",
    "a backend + AI systems engineer",
    "a computer vision enthusiast",
    "an applied AI researcher",
    "a data-driven problem solver",
    "an automation-focused engineer",
    "a creative technologist",
    "a multimodal AI builder",
    "an AI workflow architect",
    "an intelligent systems developer",
];

const INTRO_FOCUSES: [&str; 15] = [
    "building intelligent systems",
    "creating scalable AI pipelines",
    "developing end-to-end ML workflows",
    "designing LLM-based automation",
    "building RAG and agentic systems",
    "solving complex technical challenges",
    "developing robust backend architectures",
    "engineering high-performance AI models",
    "crafting seamless AI-driven experiences",
    "experimenting with multimodal models",
    "optimizing inference and model pipelines",
    "bridging software engineering with AI",
    "creating real-world GenAI applications",
    "designing automation tools that scale",
    "building user-centric AI solutions",
];

const TAGLINE_LEADS: [&str; 5] = [
    "I build scalable AI-driven experiences using ",
    "Specializing in developing ",
    "Passionate about creating ",
    "Expert in building ",
    "Focused on delivering ",
];

const TAGLINE_STACKS: [&str; 6] = [
    "Generative AI, RAG pipelines, and LLM workflow engines",
    "advanced chatbots and intelligent automation systems",
    "production-ready AI solutions with Python and modern ML tooling",
    "end-to-end AI systems with FastAPI and LangChain",
    "scalable AI applications with Flask and cloud technologies",
    "intelligent systems using machine learning and deep learning",
];

const TAGLINE_PURPOSES: [&str; 6] = [
    "to solve complex business challenges.",
    "that drive innovation and efficiency.",
    "with a focus on performance and scalability.",
    "that transform industries through AI.",
    "that push the boundaries of what's possible with AI.",
    "that deliver real business value.",
];

fn choose<'a, R: Rng + ?Sized>(items: &[&'a str], rng: &mut R) -> &'a str {
    items.choose(rng).copied().unwrap_or_default()
}

/// 输入中是否包含项目相关关键词（大小写不敏感的子串匹配）
pub fn is_project_query(text: &str) -> bool {
    let lower = text.to_lowercase();
    PROJECT_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

/// `"<title> <verb> <aspect>, <impact>."`
pub fn generate_project_explanation<R: Rng + ?Sized>(title: &str, rng: &mut R) -> String {
    format!(
        "{} {} {}, {}.",
        title,
        choose(&PROJECT_VERBS, rng),
        choose(&PROJECT_ASPECTS, rng),
        choose(&PROJECT_IMPACTS, rng)
    )
}

/// 随机挑选一个项目并生成介绍
pub fn project_blurb<R: Rng + ?Sized>(rng: &mut R) -> String {
    let title = choose(&PROJECT_TITLES, rng);
    let explanation = generate_project_explanation(title, rng);
    format!(
        "One of Saumik's notable projects is **{}**. {} Would you like details about tech stack, challenges, or results?",
        title, explanation
    )
}

pub fn generate_welcome_message<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{} {} What would you like to know?",
        choose(&GREETINGS, rng),
        choose(&CAPABILITIES, rng)
    )
}

/// 首页自我介绍：`"<prefix><role> focused on <focus>."`
pub fn generate_intro<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{}{} focused on {}.",
        choose(&INTRO_PREFIXES, rng),
        choose(&INTRO_ROLES, rng),
        choose(&INTRO_FOCUSES, rng)
    )
}

/// 首页标语
pub fn generate_tagline<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{}{} {}",
        choose(&TAGLINE_LEADS, rng),
        choose(&TAGLINE_STACKS, rng),
        choose(&TAGLINE_PURPOSES, rng)
    )
}
