//! Static provider tables
//!
//! One table per category page, authored at build time. Records are never
//! created, mutated, or destroyed at runtime; every id is unique within its
//! table (checked by the tests at the bottom).

use crate::routes::Route;
use crate::types::{Censorship, Price, Provider, Quality, Speed, WorkflowTemplate};

/// Descriptor driving the sidebar and the catalog page headers.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub name: &'static str,
    pub icon: &'static str,
    pub route: Route,
    pub gradient: &'static str,
    pub description: &'static str,
}

impl Category {
    /// Number of entries on the category's page, derived from the actual
    /// tables rather than hard-coded counts.
    pub fn count(&self) -> usize {
        match self.route {
            Route::Image {} => IMAGE_PROVIDERS.len(),
            Route::Video {} => VIDEO_PROVIDERS.len(),
            Route::Audio {} => AUDIO_PROVIDERS.len(),
            Route::ThreeD {} => THREE_D_PROVIDERS.len(),
            Route::Text {} => TEXT_PROVIDERS.len(),
            Route::Workflows {} => WORKFLOW_TEMPLATES.len(),
            _ => 0,
        }
    }
}

pub static CATEGORIES: &[Category] = &[
    Category {
        name: "Image Generation",
        icon: "\u{1F3A8}",
        route: Route::Image {},
        gradient: "from-electric-blue to-neon-cyan",
        description: "DALL-E, Midjourney, Stable Diffusion & more",
    },
    Category {
        name: "Video Generation",
        icon: "\u{1F3AC}",
        route: Route::Video {},
        gradient: "from-iridescent-purple to-coral-pink",
        description: "Minimax, Kling, Runway & more",
    },
    Category {
        name: "Audio Generation",
        icon: "\u{1F3A7}",
        route: Route::Audio {},
        gradient: "from-neon-green to-golden-yellow",
        description: "ElevenLabs, Murf, Stability AI & more",
    },
    Category {
        name: "3D Generation",
        icon: "\u{1F4E6}",
        route: Route::ThreeD {},
        gradient: "from-coral-pink to-iridescent-purple",
        description: "Meshy, Luma AI, CSM & more",
    },
    Category {
        name: "Text & Language",
        icon: "\u{1F9E0}",
        route: Route::Text {},
        gradient: "from-golden-yellow to-electric-blue",
        description: "GPT-4, Claude, Gemini & more",
    },
    Category {
        name: "Workflows",
        icon: "\u{1F500}",
        route: Route::Workflows {},
        gradient: "from-neon-cyan to-neon-green",
        description: "Chain services together",
    },
];

pub static IMAGE_PROVIDERS: &[Provider] = &[
    Provider {
        id: "dalle3-hd",
        name: "DALL-E 3",
        display_name: "DALL-E 3 HD",
        description: "OpenAI's most advanced image generation model with exceptional prompt understanding and detail.",
        logo: "\u{1F3A8}",
        rating: 4.9,
        price: Price { base: 0.08, unit: "image" },
        features: &["Ultra-high resolution", "Natural language prompts", "Style variations", "Safety filtering"],
        category: "General Purpose",
        speed: Speed::Medium,
        quality: Quality::High,
        badge: Some("Most Popular"),
        popular: true,
        censorship: Some(Censorship::Strict),
        max_duration_secs: None,
        styles: &["Photorealistic", "Artistic", "Digital Art", "Oil Painting", "3D Render"],
        output_formats: &["1024x1024", "1024x1792", "1792x1024"],
    },
    Provider {
        id: "dalle3-standard",
        name: "DALL-E 3",
        display_name: "DALL-E 3 Standard",
        description: "Standard quality version of DALL-E 3 for cost-effective generation.",
        logo: "\u{1F3A8}",
        rating: 4.8,
        price: Price { base: 0.04, unit: "image" },
        features: &["High resolution", "Natural language prompts", "Style variations", "Safety filtering"],
        category: "General Purpose",
        speed: Speed::Fast,
        quality: Quality::High,
        badge: None,
        popular: false,
        censorship: Some(Censorship::Strict),
        max_duration_secs: None,
        styles: &["Photorealistic", "Artistic", "Digital Art", "Oil Painting", "3D Render"],
        output_formats: &["1024x1024", "1024x1792", "1792x1024"],
    },
    Provider {
        id: "midjourney-v7",
        name: "Midjourney",
        display_name: "Midjourney v7",
        description: "Latest Midjourney model with enhanced realism and artistic capabilities.",
        logo: "\u{1F3AD}",
        rating: 4.9,
        price: Price { base: 0.04, unit: "image" },
        features: &["Enhanced realism", "Style consistency", "Upscaling", "Variations", "Character references"],
        category: "Artistic",
        speed: Speed::Medium,
        quality: Quality::High,
        badge: Some("Latest Model"),
        popular: true,
        censorship: Some(Censorship::Moderate),
        max_duration_secs: None,
        styles: &["Fantasy Art", "Concept Art", "Portraits", "Landscapes", "Architecture"],
        output_formats: &["1024x1024", "1024x1456", "1456x1024", "1024x1820", "1820x1024"],
    },
    Provider {
        id: "midjourney-v6",
        name: "Midjourney",
        display_name: "Midjourney v6",
        description: "Industry-leading AI art generator known for stunning artistic and aesthetic results.",
        logo: "\u{1F3AD}",
        rating: 4.8,
        price: Price { base: 0.032, unit: "image" },
        features: &["Artistic excellence", "Style consistency", "Upscaling", "Variations"],
        category: "Artistic",
        speed: Speed::Medium,
        quality: Quality::High,
        badge: Some("Best Quality"),
        popular: false,
        censorship: Some(Censorship::Moderate),
        max_duration_secs: None,
        styles: &["Fantasy Art", "Concept Art", "Portraits", "Landscapes", "Architecture"],
        output_formats: &["1024x1024", "1024x1456", "1456x1024", "1024x1820", "1820x1024"],
    },
    Provider {
        id: "flux-pro-v2",
        name: "Flux Pro",
        display_name: "Flux Pro v2",
        description: "Latest Flux model with superior prompt adherence and fine details.",
        logo: "\u{1F31F}",
        rating: 4.8,
        price: Price { base: 0.06, unit: "image" },
        features: &["Ultra-high resolution", "Precise control", "Fast generation", "Text rendering"],
        category: "Premium",
        speed: Speed::Fast,
        quality: Quality::High,
        badge: Some("Latest Model"),
        popular: false,
        censorship: Some(Censorship::Moderate),
        max_duration_secs: None,
        styles: &["Photorealistic", "Hyperrealistic", "Fine Art", "Technical", "Scientific"],
        output_formats: &["1024x1024", "1344x768", "768x1344", "1536x640", "640x1536"],
    },
    Provider {
        id: "flux-dev",
        name: "Flux Dev",
        display_name: "Flux Dev",
        description: "Developer-friendly Flux model with open weights and customization options.",
        logo: "\u{26A1}",
        rating: 4.6,
        price: Price { base: 0.025, unit: "image" },
        features: &["Open weights", "Customizable", "High quality", "Developer tools"],
        category: "Open Source",
        speed: Speed::Fast,
        quality: Quality::High,
        badge: Some("Open Source"),
        popular: false,
        censorship: Some(Censorship::Permissive),
        max_duration_secs: None,
        styles: &["Realistic", "Artistic", "Technical", "Custom Styles", "Fine-tuned"],
        output_formats: &["512x512", "768x768", "1024x1024", "1536x1024", "1024x1536"],
    },
    Provider {
        id: "flux-schnell",
        name: "Flux Schnell",
        display_name: "Flux Schnell",
        description: "Ultra-fast Flux model optimized for speed without compromising quality.",
        logo: "\u{1F4A8}",
        rating: 4.4,
        price: Price { base: 0.015, unit: "image" },
        features: &["Ultra-fast", "Good quality", "Efficient", "Real-time capable"],
        category: "Fast",
        speed: Speed::Fast,
        quality: Quality::Medium,
        badge: Some("Fastest"),
        popular: false,
        censorship: Some(Censorship::Moderate),
        max_duration_secs: None,
        styles: &["Quick sketches", "Concepts", "Rapid prototyping", "Real-time"],
        output_formats: &["512x512", "768x768", "1024x1024"],
    },
    Provider {
        id: "stable-diffusion-3-5",
        name: "Stable Diffusion",
        display_name: "Stable Diffusion 3.5",
        description: "Latest Stable Diffusion model with enhanced quality and better text rendering.",
        logo: "\u{26A1}",
        rating: 4.7,
        price: Price { base: 0.025, unit: "image" },
        features: &["Enhanced quality", "Better text", "ControlNet", "Inpainting", "Open source"],
        category: "Open Source",
        speed: Speed::Fast,
        quality: Quality::High,
        badge: Some("Latest SD"),
        popular: false,
        censorship: Some(Censorship::Permissive),
        max_duration_secs: None,
        styles: &["Anime", "Realistic", "Abstract", "Pixel Art", "Watercolor"],
        output_formats: &["512x512", "768x768", "1024x1024", "1536x1024", "1024x1536"],
    },
    Provider {
        id: "stable-diffusion-xl",
        name: "Stable Diffusion XL",
        display_name: "Stable Diffusion XL",
        description: "Open-source powerhouse with incredible customization and control options.",
        logo: "\u{26A1}",
        rating: 4.7,
        price: Price { base: 0.018, unit: "image" },
        features: &["ControlNet", "Inpainting", "Outpainting", "LoRA models", "Custom training"],
        category: "Customizable",
        speed: Speed::Fast,
        quality: Quality::High,
        badge: Some("Best Value"),
        popular: false,
        censorship: Some(Censorship::Permissive),
        max_duration_secs: None,
        styles: &["Anime", "Realistic", "Abstract", "Pixel Art", "Watercolor"],
        output_formats: &["512x512", "768x768", "1024x1024", "1536x1024", "1024x1536"],
    },
    Provider {
        id: "adobe-firefly-v3",
        name: "Adobe Firefly",
        display_name: "Adobe Firefly v3",
        description: "Latest Firefly model with enhanced commercial safety and quality.",
        logo: "\u{1F525}",
        rating: 4.7,
        price: Price { base: 0.06, unit: "image" },
        features: &["Enhanced quality", "Commercial license", "Brand consistency", "Typography integration"],
        category: "Commercial",
        speed: Speed::Medium,
        quality: Quality::High,
        badge: Some("Latest Model"),
        popular: true,
        censorship: Some(Censorship::Strict),
        max_duration_secs: None,
        styles: &["Corporate", "Marketing", "Photography", "Illustration", "Logo Design"],
        output_formats: &["1024x1024", "1408x1024", "1024x1408", "1792x1024", "1024x1792"],
    },
    Provider {
        id: "adobe-firefly",
        name: "Adobe Firefly",
        display_name: "Adobe Firefly",
        description: "Commercially safe AI art generator designed for creative professionals.",
        logo: "\u{1F525}",
        rating: 4.6,
        price: Price { base: 0.05, unit: "image" },
        features: &["Commercial license", "Brand consistency", "Typography integration", "Vector output"],
        category: "Commercial",
        speed: Speed::Medium,
        quality: Quality::High,
        badge: None,
        popular: false,
        censorship: Some(Censorship::Strict),
        max_duration_secs: None,
        styles: &["Corporate", "Marketing", "Photography", "Illustration", "Logo Design"],
        output_formats: &["1024x1024", "1408x1024", "1024x1408", "1792x1024", "1024x1792"],
    },
    Provider {
        id: "leonardo-ai-phoenix",
        name: "Leonardo AI",
        display_name: "Leonardo Phoenix",
        description: "Latest Leonardo model with enhanced photorealism and creative control.",
        logo: "\u{1F3AE}",
        rating: 4.6,
        price: Price { base: 0.03, unit: "image" },
        features: &["Enhanced photorealism", "Creative control", "Game assets", "Character design"],
        category: "Gaming",
        speed: Speed::Fast,
        quality: Quality::High,
        badge: Some("Latest Model"),
        popular: false,
        censorship: Some(Censorship::Moderate),
        max_duration_secs: None,
        styles: &["Game Art", "Character Design", "Photorealistic", "Concept Art", "3D Models"],
        output_formats: &["512x512", "768x768", "1024x1024", "1024x576", "576x1024"],
    },
    Provider {
        id: "leonardo-ai",
        name: "Leonardo AI",
        display_name: "Leonardo AI",
        description: "Game-focused AI generator with excellent character and asset creation.",
        logo: "\u{1F3AE}",
        rating: 4.5,
        price: Price { base: 0.025, unit: "image" },
        features: &["Game assets", "Character design", "Motion generation", "Texture creation"],
        category: "Gaming",
        speed: Speed::Fast,
        quality: Quality::High,
        badge: None,
        popular: false,
        censorship: Some(Censorship::Moderate),
        max_duration_secs: None,
        styles: &["Game Art", "Character Design", "Concept Art", "Pixel Art", "3D Models"],
        output_formats: &["512x512", "768x768", "1024x1024", "1024x576", "576x1024"],
    },
    Provider {
        id: "ideogram-v2",
        name: "Ideogram",
        display_name: "Ideogram v2",
        description: "Advanced text-in-image generation with exceptional typography control.",
        logo: "\u{1F4DD}",
        rating: 4.5,
        price: Price { base: 0.04, unit: "image" },
        features: &["Perfect text rendering", "Typography control", "Logo design", "Brand materials"],
        category: "Typography",
        speed: Speed::Medium,
        quality: Quality::High,
        badge: Some("Text Master"),
        popular: false,
        censorship: Some(Censorship::Moderate),
        max_duration_secs: None,
        styles: &["Logo Design", "Typography", "Brand Design", "Poster Art", "Marketing"],
        output_formats: &["1024x1024", "1024x1456", "1456x1024", "1024x1820", "1820x1024"],
    },
    Provider {
        id: "playground-v2-5",
        name: "Playground AI",
        display_name: "Playground v2.5",
        description: "Enhanced creative model with better aesthetic quality and style control.",
        logo: "\u{1F3AA}",
        rating: 4.4,
        price: Price { base: 0.035, unit: "image" },
        features: &["Enhanced aesthetics", "Style control", "Creative freedom", "Mixed media"],
        category: "Creative",
        speed: Speed::Fast,
        quality: Quality::High,
        badge: Some("Creative Pro"),
        popular: false,
        censorship: Some(Censorship::Moderate),
        max_duration_secs: None,
        styles: &["Mixed Media", "Creative Art", "Digital Painting", "Illustrations", "Fantasy"],
        output_formats: &["512x512", "768x768", "1024x1024", "1536x1024", "1024x1536"],
    },
    Provider {
        id: "juggernaut-xl",
        name: "Juggernaut XL",
        display_name: "Juggernaut XL",
        description: "Photorealistic SDXL fine-tune optimized for portrait and character generation.",
        logo: "\u{1F464}",
        rating: 4.6,
        price: Price { base: 0.02, unit: "image" },
        features: &["Photorealistic portraits", "Character focus", "High detail", "SDXL based"],
        category: "Portraits",
        speed: Speed::Fast,
        quality: Quality::High,
        badge: Some("Portrait Pro"),
        popular: false,
        censorship: Some(Censorship::Moderate),
        max_duration_secs: None,
        styles: &["Photorealistic", "Portraits", "Characters", "Professional Photos", "Headshots"],
        output_formats: &["768x768", "1024x1024", "1536x1024", "1024x1536"],
    },
    Provider {
        id: "realvisxl",
        name: "RealVisXL",
        display_name: "RealVisXL",
        description: "Ultra-realistic SDXL model for photographic quality images.",
        logo: "\u{1F4F7}",
        rating: 4.5,
        price: Price { base: 0.02, unit: "image" },
        features: &["Ultra-realistic", "Photographic quality", "Natural lighting", "SDXL based"],
        category: "Realistic",
        speed: Speed::Fast,
        quality: Quality::High,
        badge: Some("Ultra Realistic"),
        popular: false,
        censorship: Some(Censorship::Moderate),
        max_duration_secs: None,
        styles: &["Photography", "Realistic", "Natural", "Documentary", "Lifestyle"],
        output_formats: &["768x768", "1024x1024", "1536x1024", "1024x1536"],
    },
    Provider {
        id: "animagine-xl",
        name: "Animagine XL",
        display_name: "Animagine XL",
        description: "Premier anime and manga style generation model.",
        logo: "\u{1F38C}",
        rating: 4.7,
        price: Price { base: 0.02, unit: "image" },
        features: &["Anime excellence", "Manga styles", "Character consistency", "Japanese aesthetics"],
        category: "Anime",
        speed: Speed::Fast,
        quality: Quality::High,
        badge: Some("Anime Master"),
        popular: false,
        censorship: Some(Censorship::Moderate),
        max_duration_secs: None,
        styles: &["Anime", "Manga", "Japanese Art", "Character Art", "Kawaii"],
        output_formats: &["768x768", "1024x1024", "1024x1456", "1456x1024"],
    },
    Provider {
        id: "controlnet-openpose",
        name: "ControlNet OpenPose",
        display_name: "ControlNet OpenPose",
        description: "Pose-controlled image generation using OpenPose skeletal guidance.",
        logo: "\u{1F938}",
        rating: 4.3,
        price: Price { base: 0.025, unit: "image" },
        features: &["Pose control", "Human figures", "Skeletal guidance", "Precise positioning"],
        category: "Control",
        speed: Speed::Medium,
        quality: Quality::High,
        badge: Some("Pose Control"),
        popular: false,
        censorship: Some(Censorship::Moderate),
        max_duration_secs: None,
        styles: &["Human Poses", "Figure Drawing", "Character Art", "Action Scenes", "Dance"],
        output_formats: &["512x512", "768x768", "1024x1024"],
    },
    Provider {
        id: "controlnet-depth",
        name: "ControlNet Depth",
        display_name: "ControlNet Depth",
        description: "Depth-map controlled generation for 3D structure preservation.",
        logo: "\u{1F5FB}",
        rating: 4.2,
        price: Price { base: 0.025, unit: "image" },
        features: &["Depth control", "3D structure", "Spatial awareness", "Architecture"],
        category: "Control",
        speed: Speed::Medium,
        quality: Quality::High,
        badge: Some("Depth Control"),
        popular: false,
        censorship: Some(Censorship::Moderate),
        max_duration_secs: None,
        styles: &["Architecture", "Landscapes", "3D Scenes", "Interior Design", "Environments"],
        output_formats: &["512x512", "768x768", "1024x1024"],
    },
    Provider {
        id: "qr-code-monster",
        name: "QR Code Monster",
        display_name: "QR Code Monster",
        description: "Artistic QR code generation that maintains scanability.",
        logo: "\u{1F4F1}",
        rating: 4.1,
        price: Price { base: 0.03, unit: "image" },
        features: &["Artistic QR codes", "Scannable designs", "Brand integration", "Custom patterns"],
        category: "Utility",
        speed: Speed::Fast,
        quality: Quality::Medium,
        badge: Some("QR Specialist"),
        popular: false,
        censorship: Some(Censorship::Strict),
        max_duration_secs: None,
        styles: &["QR Art", "Functional Design", "Brand QR", "Creative Codes", "Marketing"],
        output_formats: &["512x512", "768x768", "1024x1024"],
    },
    Provider {
        id: "deliberate-v3",
        name: "Deliberate",
        display_name: "Deliberate v3",
        description: "Versatile model balancing realism and artistic style.",
        logo: "\u{1F3AF}",
        rating: 4.4,
        price: Price { base: 0.02, unit: "image" },
        features: &["Balanced style", "Versatile", "Good details", "Flexible prompting"],
        category: "Balanced",
        speed: Speed::Fast,
        quality: Quality::High,
        badge: None,
        popular: false,
        censorship: Some(Censorship::Moderate),
        max_duration_secs: None,
        styles: &["Semi-realistic", "Artistic", "Portraits", "Scenes", "Concepts"],
        output_formats: &["512x512", "768x768", "1024x1024"],
    },
    Provider {
        id: "dreamshaper-xl",
        name: "DreamShaper XL",
        display_name: "DreamShaper XL",
        description: "Artistic model with enhanced creativity and style flexibility.",
        logo: "\u{1F4AD}",
        rating: 4.3,
        price: Price { base: 0.02, unit: "image" },
        features: &["Creative styles", "Artistic freedom", "Style blending", "Imaginative"],
        category: "Artistic",
        speed: Speed::Fast,
        quality: Quality::High,
        badge: None,
        popular: false,
        censorship: Some(Censorship::Permissive),
        max_duration_secs: None,
        styles: &["Surreal", "Fantasy", "Abstract", "Imaginative", "Creative Art"],
        output_formats: &["768x768", "1024x1024", "1536x1024", "1024x1536"],
    },
];

pub static VIDEO_PROVIDERS: &[Provider] = &[
    Provider {
        id: "runway-gen4",
        name: "Runway Gen-4",
        display_name: "Runway Gen-4",
        description: "Latest generation Runway model with breakthrough video quality and extended duration.",
        logo: "\u{1F680}",
        rating: 4.9,
        price: Price { base: 0.25, unit: "second" },
        features: &["Ultra-high quality", "Extended duration", "Advanced motion", "Professional tools"],
        category: "Professional",
        speed: Speed::Slow,
        quality: Quality::High,
        badge: Some("Latest Model"),
        popular: true,
        censorship: None,
        max_duration_secs: Some(10),
        styles: &[],
        output_formats: &["1080p", "4K"],
    },
    Provider {
        id: "runway-gen4-turbo",
        name: "Runway Gen-4 Turbo",
        display_name: "Runway Gen-4 Turbo",
        description: "Optimized version of Gen-4 for faster generation with maintained quality.",
        logo: "\u{26A1}",
        rating: 4.8,
        price: Price { base: 0.18, unit: "second" },
        features: &["Fast generation", "High quality", "Motion control", "Efficient processing"],
        category: "Professional",
        speed: Speed::Medium,
        quality: Quality::High,
        badge: Some("Speed Optimized"),
        popular: false,
        censorship: None,
        max_duration_secs: Some(8),
        styles: &[],
        output_formats: &["720p", "1080p", "4K"],
    },
    Provider {
        id: "runway-gen3",
        name: "Runway Gen-3",
        display_name: "Runway Gen-3 Alpha",
        description: "Professional-grade video generation with fine-grained control and editing tools.",
        logo: "\u{1F6EB}",
        rating: 4.6,
        price: Price { base: 0.15, unit: "second" },
        features: &["Professional tools", "Motion control", "Inpainting", "Camera control"],
        category: "Professional",
        speed: Speed::Slow,
        quality: Quality::High,
        badge: None,
        popular: false,
        censorship: None,
        max_duration_secs: Some(4),
        styles: &[],
        output_formats: &["720p", "1080p"],
    },
    Provider {
        id: "google-imagen-video-gen3",
        name: "Google Imagen Video",
        display_name: "Imagen Video Gen-3",
        description: "Google's latest video generation model with exceptional realism and temporal consistency.",
        logo: "\u{1F50D}",
        rating: 4.8,
        price: Price { base: 0.20, unit: "second" },
        features: &["Photorealistic", "Temporal consistency", "Text-to-video", "High fidelity"],
        category: "Realistic",
        speed: Speed::Medium,
        quality: Quality::High,
        badge: Some("Google AI"),
        popular: false,
        censorship: None,
        max_duration_secs: Some(8),
        styles: &[],
        output_formats: &["1080p", "4K"],
    },
    Provider {
        id: "google-imagen-video-gen2",
        name: "Google Imagen Video",
        display_name: "Imagen Video Gen-2",
        description: "Previous generation Google video model, reliable and cost-effective.",
        logo: "\u{1F50D}",
        rating: 4.5,
        price: Price { base: 0.12, unit: "second" },
        features: &["Reliable quality", "Good motion", "Text understanding", "Cost effective"],
        category: "General Purpose",
        speed: Speed::Medium,
        quality: Quality::High,
        badge: None,
        popular: false,
        censorship: None,
        max_duration_secs: Some(6),
        styles: &[],
        output_formats: &["720p", "1080p"],
    },
    Provider {
        id: "hunyuan-video-pro",
        name: "Hunyuan Video",
        display_name: "Hunyuan Video Pro",
        description: "Tencent's advanced video generation model with superior Chinese text understanding.",
        logo: "\u{1F409}",
        rating: 4.7,
        price: Price { base: 0.14, unit: "second" },
        features: &["Multilingual", "Chinese text support", "Cultural accuracy", "High quality"],
        category: "Multilingual",
        speed: Speed::Medium,
        quality: Quality::High,
        badge: Some("Multilingual"),
        popular: false,
        censorship: None,
        max_duration_secs: Some(8),
        styles: &[],
        output_formats: &["720p", "1080p", "4K"],
    },
    Provider {
        id: "hunyuan-video-lite",
        name: "Hunyuan Video",
        display_name: "Hunyuan Video Lite",
        description: "Lightweight version optimized for speed and efficiency.",
        logo: "\u{1F432}",
        rating: 4.4,
        price: Price { base: 0.08, unit: "second" },
        features: &["Fast generation", "Efficient", "Good quality", "Multilingual support"],
        category: "Fast",
        speed: Speed::Fast,
        quality: Quality::Medium,
        badge: None,
        popular: false,
        censorship: None,
        max_duration_secs: Some(5),
        styles: &[],
        output_formats: &["720p", "1080p"],
    },
    Provider {
        id: "wan21-720p",
        name: "Wan2.1",
        display_name: "Wan2.1 (720p)",
        description: "High-quality video generation optimized for 720p resolution with excellent detail.",
        logo: "\u{1F30A}",
        rating: 4.6,
        price: Price { base: 0.10, unit: "second" },
        features: &["720p optimized", "High detail", "Smooth motion", "Artistic styles"],
        category: "Artistic",
        speed: Speed::Medium,
        quality: Quality::High,
        badge: Some("720p Specialist"),
        popular: false,
        censorship: None,
        max_duration_secs: Some(6),
        styles: &[],
        output_formats: &["720p"],
    },
    Provider {
        id: "wan21-480p",
        name: "Wan2.1",
        display_name: "Wan2.1 (480p)",
        description: "Fast and efficient video generation for 480p content with artistic flair.",
        logo: "\u{1F30A}",
        rating: 4.3,
        price: Price { base: 0.06, unit: "second" },
        features: &["480p optimized", "Fast generation", "Artistic quality", "Cost effective"],
        category: "Fast",
        speed: Speed::Fast,
        quality: Quality::Medium,
        badge: Some("Budget Friendly"),
        popular: false,
        censorship: None,
        max_duration_secs: Some(8),
        styles: &[],
        output_formats: &["480p"],
    },
    Provider {
        id: "minimax-video-01",
        name: "Minimax Video-01",
        display_name: "Minimax Video-01",
        description: "Leading Chinese AI video generator with exceptional quality and prompt adherence.",
        logo: "\u{1F3AC}",
        rating: 4.8,
        price: Price { base: 0.12, unit: "second" },
        features: &["High resolution", "Smooth motion", "Text-to-video", "Image-to-video"],
        category: "General Purpose",
        speed: Speed::Medium,
        quality: Quality::High,
        badge: Some("Most Popular"),
        popular: true,
        censorship: None,
        max_duration_secs: Some(6),
        styles: &[],
        output_formats: &["720p", "1080p"],
    },
    Provider {
        id: "kling-ai-v15",
        name: "Kling AI",
        display_name: "Kling AI v1.5",
        description: "Updated Kling AI with improved realism and extended duration capabilities.",
        logo: "\u{1F3AF}",
        rating: 4.7,
        price: Price { base: 0.10, unit: "second" },
        features: &["Realistic motion", "Long duration", "Multiple aspects", "Style transfer"],
        category: "Realistic",
        speed: Speed::Medium,
        quality: Quality::High,
        badge: Some("Best Quality"),
        popular: false,
        censorship: None,
        max_duration_secs: Some(12),
        styles: &[],
        output_formats: &["720p", "1080p", "4K"],
    },
    Provider {
        id: "pika-labs-v2",
        name: "Pika Labs",
        display_name: "Pika 2.0",
        description: "Enhanced version with improved creative control and animation capabilities.",
        logo: "\u{1F3A8}",
        rating: 4.6,
        price: Price { base: 0.09, unit: "second" },
        features: &["Enhanced creativity", "Better animation", "Style consistency", "Creative control"],
        category: "Creative",
        speed: Speed::Fast,
        quality: Quality::High,
        badge: Some("Creative Pro"),
        popular: false,
        censorship: None,
        max_duration_secs: Some(5),
        styles: &[],
        output_formats: &["720p", "1080p", "4K"],
    },
    Provider {
        id: "luma-dream-machine-v2",
        name: "Luma Dream Machine",
        display_name: "Luma Dream Machine v2",
        description: "Enhanced version with improved quality and extended capabilities.",
        logo: "\u{1F4AB}",
        rating: 4.5,
        price: Price { base: 0.07, unit: "second" },
        features: &["Improved quality", "Fast generation", "Text prompts", "Image animation"],
        category: "Fast",
        speed: Speed::Fast,
        quality: Quality::High,
        badge: None,
        popular: false,
        censorship: None,
        max_duration_secs: Some(7),
        styles: &[],
        output_formats: &["720p", "1080p", "4K"],
    },
    Provider {
        id: "zeroscope-v2",
        name: "Zeroscope",
        display_name: "Zeroscope v2",
        description: "Open-source video generation model with good quality and customization options.",
        logo: "\u{1F52C}",
        rating: 4.2,
        price: Price { base: 0.05, unit: "second" },
        features: &["Open source", "Customizable", "Good quality", "Research friendly"],
        category: "Open Source",
        speed: Speed::Medium,
        quality: Quality::Medium,
        badge: None,
        popular: false,
        censorship: None,
        max_duration_secs: Some(4),
        styles: &[],
        output_formats: &["576p", "720p"],
    },
    Provider {
        id: "stable-video-xl",
        name: "Stable Video Diffusion",
        display_name: "Stable Video XL",
        description: "Enhanced open-source video generation with higher resolution and better quality.",
        logo: "\u{26A1}",
        rating: 4.4,
        price: Price { base: 0.06, unit: "second" },
        features: &["Open source", "High resolution", "ControlNet", "Fine-tuning"],
        category: "Open Source",
        speed: Speed::Medium,
        quality: Quality::High,
        badge: None,
        popular: false,
        censorship: None,
        max_duration_secs: Some(6),
        styles: &[],
        output_formats: &["720p", "1080p"],
    },
    Provider {
        id: "animatediff",
        name: "AnimateDiff",
        display_name: "AnimateDiff",
        description: "Animation-focused model for creating smooth video transitions and motion.",
        logo: "\u{1F3AD}",
        rating: 4.3,
        price: Price { base: 0.04, unit: "second" },
        features: &["Animation focused", "Smooth transitions", "Motion control", "Style transfer"],
        category: "Animation",
        speed: Speed::Fast,
        quality: Quality::Medium,
        badge: None,
        popular: false,
        censorship: None,
        max_duration_secs: Some(3),
        styles: &[],
        output_formats: &["512p", "720p"],
    },
    Provider {
        id: "morph-studio",
        name: "Morph Studio",
        display_name: "Morph Studio",
        description: "Specialized video morphing and transformation effects.",
        logo: "\u{1F504}",
        rating: 4.1,
        price: Price { base: 0.08, unit: "second" },
        features: &["Video morphing", "Transformation", "Effects", "Creative tools"],
        category: "Effects",
        speed: Speed::Medium,
        quality: Quality::Medium,
        badge: None,
        popular: false,
        censorship: None,
        max_duration_secs: Some(4),
        styles: &[],
        output_formats: &["720p", "1080p"],
    },
    Provider {
        id: "gen2-stability",
        name: "Gen-2 Stability",
        display_name: "Gen-2 (Stability AI)",
        description: "Stability AI's video generation model with consistent quality.",
        logo: "\u{2696}",
        rating: 4.2,
        price: Price { base: 0.07, unit: "second" },
        features: &["Consistent quality", "Stable results", "Good motion", "Reliable"],
        category: "Stable",
        speed: Speed::Medium,
        quality: Quality::Medium,
        badge: None,
        popular: false,
        censorship: None,
        max_duration_secs: Some(4),
        styles: &[],
        output_formats: &["720p", "1080p"],
    },
    Provider {
        id: "cogvideo",
        name: "CogVideo",
        display_name: "CogVideo",
        description: "Open-source large-scale text-to-video generation model.",
        logo: "\u{1F9E0}",
        rating: 4.0,
        price: Price { base: 0.03, unit: "second" },
        features: &["Open source", "Large scale", "Text-to-video", "Research grade"],
        category: "Research",
        speed: Speed::Slow,
        quality: Quality::Medium,
        badge: None,
        popular: false,
        censorship: None,
        max_duration_secs: Some(5),
        styles: &[],
        output_formats: &["480p", "720p"],
    },
];

pub static AUDIO_PROVIDERS: &[Provider] = &[
    Provider {
        id: "elevenlabs",
        name: "ElevenLabs",
        display_name: "ElevenLabs",
        description: "Premium voice synthesis with natural-sounding AI voices",
        logo: "\u{1F399}",
        rating: 4.9,
        price: Price { base: 0.24, unit: "1K characters" },
        features: &["Voice cloning", "Multilingual", "Emotional range", "Real-time"],
        category: "Voice",
        speed: Speed::Fast,
        quality: Quality::High,
        badge: Some("Most Popular"),
        popular: true,
        censorship: None,
        max_duration_secs: None,
        styles: &[],
        output_formats: &[],
    },
    Provider {
        id: "murf",
        name: "Murf AI",
        display_name: "Murf AI",
        description: "Professional voiceover generation for content creators",
        logo: "\u{1F3B5}",
        rating: 4.7,
        price: Price { base: 0.18, unit: "1K characters" },
        features: &["120+ voices", "20+ languages", "SSML support", "Custom voices"],
        category: "Voiceover",
        speed: Speed::Medium,
        quality: Quality::High,
        badge: None,
        popular: false,
        censorship: None,
        max_duration_secs: None,
        styles: &[],
        output_formats: &[],
    },
    Provider {
        id: "stability-audio",
        name: "Stability Audio",
        display_name: "Stability Audio",
        description: "Music and sound effect generation with high quality",
        logo: "\u{1F3BC}",
        rating: 4.5,
        price: Price { base: 0.02, unit: "second" },
        features: &["Music generation", "Sound effects", "Stem separation", "Long form"],
        category: "Music",
        speed: Speed::Medium,
        quality: Quality::High,
        badge: None,
        popular: false,
        censorship: None,
        max_duration_secs: None,
        styles: &[],
        output_formats: &[],
    },
];

pub static THREE_D_PROVIDERS: &[Provider] = &[
    Provider {
        id: "meshy",
        name: "Meshy",
        display_name: "Meshy",
        description: "Text-to-3D and image-to-3D model generation",
        logo: "\u{1F3AD}",
        rating: 4.7,
        price: Price { base: 0.50, unit: "model" },
        features: &["Text-to-3D", "Image-to-3D", "High quality", "Fast generation"],
        category: "General Purpose",
        speed: Speed::Fast,
        quality: Quality::High,
        badge: Some("Most Popular"),
        popular: true,
        censorship: None,
        max_duration_secs: None,
        styles: &[],
        output_formats: &[],
    },
    Provider {
        id: "luma-ai",
        name: "Luma AI",
        display_name: "Luma AI",
        description: "3D capture and generation with photorealistic quality",
        logo: "\u{1F4D0}",
        rating: 4.6,
        price: Price { base: 0.75, unit: "model" },
        features: &["Photogrammetry", "NeRF capture", "Real-time", "Mobile app"],
        category: "Capture",
        speed: Speed::Medium,
        quality: Quality::High,
        badge: None,
        popular: false,
        censorship: None,
        max_duration_secs: None,
        styles: &[],
        output_formats: &[],
    },
    Provider {
        id: "csm",
        name: "CSM",
        display_name: "CSM",
        description: "Common Sense Machines for 3D understanding",
        logo: "\u{1F52E}",
        rating: 4.4,
        price: Price { base: 0.35, unit: "model" },
        features: &["Multi-view", "Geometric accuracy", "Texture mapping", "Animation ready"],
        category: "Research",
        speed: Speed::Medium,
        quality: Quality::Medium,
        badge: None,
        popular: false,
        censorship: None,
        max_duration_secs: None,
        styles: &[],
        output_formats: &[],
    },
];

pub static TEXT_PROVIDERS: &[Provider] = &[
    Provider {
        id: "gpt4",
        name: "GPT-4",
        display_name: "GPT-4",
        description: "OpenAI's most advanced language model for any text task",
        logo: "\u{1F9E0}",
        rating: 4.9,
        price: Price { base: 0.03, unit: "1K tokens" },
        features: &["128K context", "Code generation", "Reasoning", "Multimodal"],
        category: "General Purpose",
        speed: Speed::Medium,
        quality: Quality::High,
        badge: Some("Most Popular"),
        popular: true,
        censorship: None,
        max_duration_secs: None,
        styles: &[],
        output_formats: &[],
    },
    Provider {
        id: "claude3-opus",
        name: "Claude 3 Opus",
        display_name: "Claude 3 Opus",
        description: "Anthropic's most capable model for complex reasoning",
        logo: "\u{1F3AD}",
        rating: 4.8,
        price: Price { base: 0.075, unit: "1K tokens" },
        features: &["200K context", "Advanced reasoning", "Safety focused", "Multimodal"],
        category: "Reasoning",
        speed: Speed::Medium,
        quality: Quality::High,
        badge: None,
        popular: false,
        censorship: None,
        max_duration_secs: None,
        styles: &[],
        output_formats: &[],
    },
    Provider {
        id: "gemini-pro",
        name: "Gemini Pro",
        display_name: "Gemini Pro",
        description: "Google's advanced AI for text and multimodal tasks",
        logo: "\u{1F48E}",
        rating: 4.6,
        price: Price { base: 0.025, unit: "1K tokens" },
        features: &["1M context", "Multimodal", "Fast generation", "Google integration"],
        category: "Multimodal",
        speed: Speed::Fast,
        quality: Quality::High,
        badge: None,
        popular: false,
        censorship: None,
        max_duration_secs: None,
        styles: &[],
        output_formats: &[],
    },
];

pub static WORKFLOW_TEMPLATES: &[WorkflowTemplate] = &[
    WorkflowTemplate {
        id: "image-upscale-enhance",
        name: "Image Upscale & Enhance",
        description: "Generate image \u{2192} Upscale \u{2192} Apply style transfer",
        steps: 3,
        category: "Image Processing",
    },
    WorkflowTemplate {
        id: "video-script-production",
        name: "Video Script to Production",
        description: "Text script \u{2192} Voice generation \u{2192} Video creation \u{2192} Music overlay",
        steps: 4,
        category: "Content Creation",
    },
    WorkflowTemplate {
        id: "podcast-automation",
        name: "Podcast Automation",
        description: "Script writing \u{2192} Voice synthesis \u{2192} Audio enhancement \u{2192} Thumbnail generation",
        steps: 4,
        category: "Audio Production",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_unique_ids(providers: &[Provider]) {
        let mut seen = HashSet::new();
        for p in providers {
            assert!(seen.insert(p.id), "duplicate provider id: {}", p.id);
        }
    }

    #[test]
    fn provider_ids_are_unique_within_each_table() {
        assert_unique_ids(IMAGE_PROVIDERS);
        assert_unique_ids(VIDEO_PROVIDERS);
        assert_unique_ids(AUDIO_PROVIDERS);
        assert_unique_ids(THREE_D_PROVIDERS);
        assert_unique_ids(TEXT_PROVIDERS);
    }

    #[test]
    fn workflow_template_ids_are_unique() {
        let mut seen = HashSet::new();
        for t in WORKFLOW_TEMPLATES {
            assert!(seen.insert(t.id), "duplicate template id: {}", t.id);
        }
    }

    #[test]
    fn tables_are_populated() {
        assert!(!IMAGE_PROVIDERS.is_empty());
        assert!(!VIDEO_PROVIDERS.is_empty());
        assert!(!AUDIO_PROVIDERS.is_empty());
        assert!(!THREE_D_PROVIDERS.is_empty());
        assert!(!TEXT_PROVIDERS.is_empty());
        assert_eq!(CATEGORIES.len(), 6);
    }

    #[test]
    fn video_records_carry_durations() {
        for p in VIDEO_PROVIDERS {
            assert!(p.max_duration_secs.is_some(), "{} has no duration", p.id);
        }
    }

    #[test]
    fn category_counts_track_the_tables() {
        let image = CATEGORIES
            .iter()
            .find(|c| matches!(c.route, Route::Image {}))
            .expect("image category present");
        assert_eq!(image.count(), IMAGE_PROVIDERS.len());
    }
}
