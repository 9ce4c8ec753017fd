// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use crate::model::{Feature, Solution, Stat};

pub static SOLUTIONS: &[Solution] = &[
    Solution {
        slug: "ai-voice-agents",
        name: "AI Voice Agents",
        tagline: "Answer every call, book every appointment.",
        description: "Natural-sounding phone agents that pick up on the first ring, \
                      qualify callers and book appointments straight into your calendar.\n\n\
                      Calls are transcribed and summarised so your team **only handles \
                      the conversations that need a human**.",
        benefits: &[
            "Never miss a call, including nights and weekends",
            "Cut hold times to zero",
            "Book appointments while the caller is still on the line",
            "Hand off to staff with a full call summary",
        ],
        features: &[
            Feature {
                title: "Inbound call handling",
                description: "Greets callers, answers common questions and routes the rest.",
            },
            Feature {
                title: "Calendar booking",
                description: "Reads live availability and confirms slots during the call.",
            },
            Feature {
                title: "Warm transfer",
                description: "Passes urgent calls to a person along with the context so far.",
            },
            Feature {
                title: "Call analytics",
                description: "Transcripts, intent tags and outcome tracking for every call.",
            },
        ],
        use_cases: &[
            "After-hours reception",
            "Appointment scheduling",
            "Lead qualification",
            "Order status lookups",
        ],
        color: "blue",
        stats: &[
            Stat { value: "24/7", label: "call coverage" },
            Stat { value: "<1s", label: "answer time" },
            Stat { value: "35%", label: "more booked appointments" },
        ],
    },
    Solution {
        slug: "ai-chatbots",
        name: "AI Chatbots",
        tagline: "Turn website visitors into qualified leads.",
        description: "Website and messaging chatbots trained on your services, pricing \
                      and policies.\n\n\
                      They answer questions instantly, capture contact details and push \
                      qualified leads into your CRM.",
        benefits: &[
            "Instant answers on every page",
            "Lead capture outside business hours",
            "Consistent answers drawn from your own content",
            "Fewer repetitive emails for your staff",
        ],
        features: &[
            Feature {
                title: "Trained on your content",
                description: "Learns from your site, FAQs and documents.",
            },
            Feature {
                title: "CRM sync",
                description: "Creates and updates contacts with the full transcript attached.",
            },
            Feature {
                title: "Multichannel",
                description: "Runs on your website, SMS and social messaging.",
            },
        ],
        use_cases: &[
            "Website lead capture",
            "Customer support deflection",
            "Quote requests",
            "Product recommendations",
        ],
        color: "violet",
        stats: &[
            Stat { value: "3x", label: "more captured leads" },
            Stat { value: "70%", label: "questions resolved without staff" },
            Stat { value: "24/7", label: "availability" },
        ],
    },
    Solution {
        slug: "ai-video-agents",
        name: "AI Video Agents",
        tagline: "A face for your brand that never clocks out.",
        description: "Interactive video avatars that greet visitors, explain your \
                      offering and walk prospects through next steps.\n\n\
                      Ideal for high-consideration purchases where **a personal touch \
                      closes the deal**.",
        benefits: &[
            "Personal, face-to-face feel at any scale",
            "Higher engagement than static pages",
            "Consistent delivery of your best pitch",
        ],
        features: &[
            Feature {
                title: "Custom avatars",
                description: "Branded presenters that match your team and tone.",
            },
            Feature {
                title: "Live conversation",
                description: "Responds to spoken or typed questions in real time.",
            },
            Feature {
                title: "Guided tours",
                description: "Walks prospects through listings, menus or service plans.",
            },
        ],
        use_cases: &[
            "Virtual showroom tours",
            "Onboarding walkthroughs",
            "Personalised sales follow-ups",
        ],
        color: "rose",
        stats: &[
            Stat { value: "2.5x", label: "longer time on page" },
            Stat { value: "40%", label: "higher conversion on tours" },
            Stat { value: "30+", label: "supported languages" },
        ],
    },
    Solution {
        slug: "ai-automation",
        name: "AI Automation",
        tagline: "Take the busywork off your team's plate.",
        description: "Workflow automation that connects your phone system, inbox, CRM \
                      and scheduling tools.\n\n\
                      Follow-ups, reminders, data entry and reporting run on their own \
                      so staff can focus on customers.",
        benefits: &[
            "Hours of manual data entry removed each week",
            "Follow-ups that never slip",
            "Clean, up-to-date CRM records",
            "Reports delivered without spreadsheets",
        ],
        features: &[
            Feature {
                title: "Workflow builder",
                description: "Chains triggers and actions across the tools you already use.",
            },
            Feature {
                title: "Document processing",
                description: "Extracts fields from forms, invoices and emails.",
            },
            Feature {
                title: "Automated follow-up",
                description: "Sends reminders and nurture messages on schedule.",
            },
        ],
        use_cases: &[
            "Appointment reminders",
            "Invoice and form processing",
            "Review requests",
            "Pipeline reporting",
        ],
        color: "emerald",
        stats: &[
            Stat { value: "20h", label: "saved per employee each month" },
            Stat { value: "99%", label: "data entry accuracy" },
            Stat { value: "50+", label: "integrations" },
        ],
    },
];
