use super::{Catalog, Category, CategoryId, Icon, Link, Project, ProjectDetails, ProjectId};

pub fn builtin_catalog() -> Catalog {
    Catalog {
        categories: vec![
            category("automations", "Automations", Icon::Workflow),
            category("ai-integrations", "AI Integrations", Icon::Brain),
            category("telegram-bots", "Telegram Bots", Icon::MessageSquare),
            category("web-apps", "Web Apps", Icon::Globe),
        ],
        projects: vec![
            Project {
                id: ProjectId(101),
                title: "AI News Telegram Channel".to_string(),
                subtitle: "Automated AI/automation news curation and posting pipeline".to_string(),
                category: CategoryId::new("automations"),
                tech: strings(&["N8n", "JavaScript", "LLM"]),
                details: ProjectDetails {
                    overview: Some(
                        "A fully automated AI-driven news channel that continuously finds, filters, and publishes the most relevant and practical updates in AI, automation, and related technologies. The system monitors multiple sources, evaluates each article for relevance, summarizes it, generates a clean Telegram-ready post, and publishes it automatically."
                            .to_string(),
                    ),
                    setup: Some(
                        "Article extraction uses several methods depending on the website. A series of AI nodes perform validation, duplication checks, summarization with structured storage, cover image selection, and rephrasing for Telegram delivery. When marked ready, the post publishes automatically."
                            .to_string(),
                    ),
                    notes: Some(
                        "The channel is public, and is available here: https://t.me/simpleflow_ai"
                            .to_string(),
                    ),
                    abilities: Some(strings(&[
                        "Automatic collection of news articles from multiple sources",
                        "Intelligent filtering to ensure each article matches the channel’s criteria",
                        "AI-powered summarization, rephrasing, and formatting for Telegram",
                        "Automatic selection of a relevant cover image",
                        "All posts logged, versioned, and tracked in a centralized Notion database",
                        "Entire system is built on the n8n automation platform",
                        "Workflows are separated into modular pipelines, all connected through a shared Notion database",
                        "Article extraction uses several methods depending on the website:",
                        "Direct HTML scraping",
                        "RSS feeds",
                        "AI-powered research and content retrieval",
                        "Validate that an article matches the posting criteria",
                        "Check the database to prevent duplicate news",
                        "Summarize the article and save structured data to Notion",
                        "Find or generate a relevant cover image",
                        "Rephrase and format the content for clean Telegram delivery",
                        "When a post is “ready to be posted”, it is automatically published to the Telegram channel",
                    ])),
                    links: Some(vec![
                        link("Link", "https://t.me/simpleflow_ai"),
                    ]),
                    ..ProjectDetails::default()
                },
            },
            Project {
                id: ProjectId(103),
                title: "Straddle Trading Bot".to_string(),
                subtitle: "Automated straddle execution around major economic news".to_string(),
                category: CategoryId::new("automations"),
                tech: strings(&["N8n", "Telegram", "Python", "SQL"]),
                details: ProjectDetails {
                    overview: Some(
                        "An automated trading system designed to execute straddle orders on Solana (or any other asset) before major economic news releases. The bot places a stop-buy order above the current market price and a stop-sell order below it. When the news is released and volatility spikes, one of the orders is triggered, capturing the price breakout in the correct direction while the opposite order is automatically canceled. The system manages entries, exits, and notifications end-to-end."
                            .to_string(),
                    ),
                    abilities: Some(strings(&[
                        "Automated Economic Event Scheduling: Automatically retrieves upcoming U.S. economic data release dates (BLS) and stores them in a database.",
                        "Custom Event Support: Users can add additional custom events through a Telegram bot interface.",
                        "Automated Straddle Execution: 10 minutes before each event, the bot places conditional buy and sell orders based on current price and ATR-based volatility calculations.",
                        "Position Management: Whichever side is triggered first becomes the active trade; the opposite order is automatically canceled; the bot then places take-profit and stop-loss orders using ATR-based levels; if no order triggers within 2 hours post-event, both are canceled.",
                        "Telegram Notifications: Full transparency of every stage — scheduling, order placement, fills, cancellations, and errors.",
                        "Event Scheduling (n8n Workflow): Runs monthly to scrape and parse the official BLS release calendar; cleans and stores events in a MySQL database (duplicate-aware); can also be triggered manually from Telegram to add custom events.",
                        "Event Triggering (n8n Worker Loop): Runs every 2 minutes to check for events occurring within the next 10 minutes; when an event is approaching, it forwards the event payload to the trading bot API and marks the event as processed.",
                        "Trading Engine (Python + FastAPI): Receives event data, fetches current Solana market price, and calculates straddle entry levels via ATR; places stop-orders on Bybit and monitors order execution; handles order cancellation, TP, and SL placement automatically.",
                        "Telegram Bot Interface (Python): Sends real-time execution updates and alerts; allows the user to view upcoming events and manage custom events; useful as both monitoring + interaction frontend.",
                    ])),
                    ..ProjectDetails::default()
                },
            },
            Project {
                id: ProjectId(104),
                title: "Thank you letter & review request automation".to_string(),
                subtitle: "Automated follow-up and review routing for a moving company".to_string(),
                category: CategoryId::new("automations"),
                tech: strings(&["Make.com", "GoHighLevel"]),
                details: ProjectDetails {
                    overview: Some(
                        "The client — a moving company — had no structured system to follow up with customers after a completed service, resulting in missed opportunities for reviews and feedback. To solve this, we built an automated thank-you and review request system that messages every customer after their move is completed. Each message thanks them for choosing the company, reminds them about their future move discount, and requests feedback."
                            .to_string(),
                    ),
                    setup: Some(
                        "Built using Make.com. Runs daily to scan completed jobs from the calendar and CRM, filters out any jobs flagged “Move went bad – don’t request review,” and sends personalized thank-you emails with direct review or internal feedback routing."
                            .to_string(),
                    ),
                    abilities: Some(strings(&[
                        "If a customer selects 5 stars, they’re redirected directly to the company’s Google review page.",
                        "If they select 4 stars or below, they’re directed to an internal feedback form, allowing the company to review and address concerns privately.",
                        "Built using the Make.com platform.",
                        "The automation runs once a day, scanning the company’s calendar for jobs completed 2 days prior.",
                        "For each job, it retrieves customer details from the CRM, verifies that the field “Move went bad – don’t request review” is not marked true, and then proceeds.",
                        "Once verified, the system automatically sends a personalized thank-you email with the review and feedback link.",
                    ])),
                    ..ProjectDetails::default()
                },
            },
            Project {
                id: ProjectId(201),
                title: "AI Webchat Assistant".to_string(),
                subtitle: "AI-powered assistant for a moving company".to_string(),
                category: CategoryId::new("ai-integrations"),
                tech: strings(&["N8n", "Vector database", "LLM"]),
                details: ProjectDetails {
                    overview: Some(
                        "An AI-powered assistant designed to manage customer inquiries for a moving company. The frontend is a webchat widget integrated directly into the company’s main website, allowing users to ask questions, receive instant answers, and get tailored suggestions for their upcoming moves."
                            .to_string(),
                    ),
                    setup: Some(
                        "Built on n8n with OpenAI’s ChatGPT 4.1 mini and a RAG workflow over a vectorized knowledge base. The HTML webchat widget sits inside their GoHighLevel-hosted site."
                            .to_string(),
                    ),
                    abilities: Some(strings(&[
                        "The assistant is built on the n8n platform, using OpenAI’s ChatGPT 4.1 mini as its core model.",
                        "It employs a RAG (Retrieval-Augmented Generation) process to access and reference internal company data in real time.",
                        "The assistant’s knowledge base was structured and vectorized into multiple documents containing information about services, pricing, policies, and FAQs.",
                        "The frontend widget was developed in HTML and embedded into the company’s website, which is hosted within their CRM system (GoHighLevel).",
                    ])),
                    ..ProjectDetails::default()
                },
            },
            Project {
                id: ProjectId(301),
                title: "Consulting agency telegram bot".to_string(),
                subtitle: "Service exploration and CRM handoff bot for an immigration agency".to_string(),
                category: CategoryId::new("telegram-bots"),
                tech: strings(&["Telegram", "Python"]),
                details: ProjectDetails {
                    overview: Some(
                        "A custom Telegram bot built for a U.S.-based immigration consulting agency to streamline how potential clients explore services and connect with representatives. The bot allows users to easily browse and submit service requests, learn about the company, schedule a Zoom consultation, or ask questions directly within Telegram."
                            .to_string(),
                    ),
                    abilities: Some(strings(&[
                        "Service Exploration – A welcoming message with intuitive inline buttons that guide users through available services. Each option includes a brief explanation and the ability to apply directly within the chat.",
                        "CRM Integration – When a user selects a service, the bot automatically collects their contact details and sends the data to the agency’s CRM with proper tags and service notes.",
                        "Navigation Buttons – Four main keyboard buttons for quick access:",
                        "Main Menu – Returns the original greeting message with service options.",
                        "Ask a Question – Lets users message the bot directly; their question and contact info are sent to the agency’s internal Telegram group for follow-up.",
                        "About Us – Displays a company overview, contact details, and social media links.",
                        "Zoom Meeting – Shares a Calendly link so users can book a Zoom consultation with a representative.",
                        "/help Command – Displays a quick reference guide outlining all available bot functions.",
                        "Developed entirely with Python.",
                        "Continuously hosted and maintained on a private VPS.",
                    ])),
                    ..ProjectDetails::default()
                },
            },
            Project {
                id: ProjectId(403),
                title: "Immigration consulting web quiz".to_string(),
                subtitle: "Visa eligibility quiz with automated CRM handoff".to_string(),
                category: CategoryId::new("web-apps"),
                tech: strings(&["JavaScript", "LLM", "Netlify"]),
                details: ProjectDetails {
                    overview: Some(
                        "A web-based visa eligibility quiz built for a U.S. immigration consulting firm (Russian language interface). The quiz guides users through a short sequence of questions and, based on their responses, calculates their approximate chances of visa approval and recommends the most suitable visa categories. Before displaying results, the quiz prompts the user for contact information and automatically sends the lead to the firm’s CRM for follow-up."
                            .to_string(),
                    ),
                    abilities: Some(strings(&[
                        "Probability Scoring: Calculates the user’s estimated likelihood of visa approval based on weighted responses.",
                        "Visa Recommendations: Suggests the most relevant U.S. visa categories for the user’s situation.",
                        "Automated Lead Capture: Collects contact details and creates the prospect inside the CRM.",
                        "CRM Integration: Adds tags, updates the pipeline stage, and attaches a full summary of user responses and recommendations.",
                        "Team Notifications: Automatically sends a new-lead alert to the firm’s internal Telegram group.",
                        "Frontend: Built with React + TypeScript and deployed on Netlify.",
                        "Logic Model: The scoring system and visa recommendation logic were defined with the firm and refined using AI assistance. Each quiz response contributes weighted points to the total score.",
                        "Automation: On submission, data is sent to a Make.com workflow, which: Creates the contact in the CRM; Adds the appropriate tags and custom notes; Moves the lead to the correct pipeline stage; Sends a Telegram notification to the team.",
                    ])),
                    ..ProjectDetails::default()
                },
            },
            Project {
                id: ProjectId(404),
                title: "Custom websites".to_string(),
                subtitle: "React/TypeScript sites with tailored design and deployment".to_string(),
                category: CategoryId::new("web-apps"),
                tech: strings(&["JavaScript", "Netlify", "Cloudflare Pages"]),
                details: ProjectDetails {
                    overview: Some(
                        "Custom-built websites and landing pages designed to align with your brand’s identity and goals. Even if you’re unsure of the style or direction, I can help you define it from scratch. All websites are developed using React, TypeScript, and Tailwind CSS. Every project is handled end-to-end: from concept and design to a fully deployed website hosted on your domain."
                            .to_string(),
                    ),
                    abilities: Some(strings(&[
                        "Tailored design — Every website is uniquely created to match your brand’s tone.",
                        "Modern functionality — Animations, databases, dynamic forms, AI chatbots, and other tool integrations available.",
                        "Deployment-ready — Full setup and hosting assistance on Netlify or your preferred platform.",
                        "Demo sites available on request.",
                    ])),
                    links: Some(vec![
                        link("Demo sites", "#"),
                    ]),
                    ..ProjectDetails::default()
                },
            },
        ],
    }
}

fn category(id: &str, display_name: &str, icon: Icon) -> Category {
    Category {
        id: CategoryId::new(id),
        display_name: display_name.to_string(),
        icon,
    }
}

fn link(label: &str, href: &str) -> Link {
    Link {
        label: label.to_string(),
        href: href.to_string(),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
