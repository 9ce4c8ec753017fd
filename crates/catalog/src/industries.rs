// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use crate::model::{Challenge, Faq, Industry, Stat};

pub static INDUSTRIES: &[Industry] = &[
    Industry {
        slug: "automotive",
        name: "Automotive & Dealership",
        headline: "Sell more cars and fill the service bay",
        description: "Dealerships lose buyers to slow callbacks and missed service \
                      calls.\n\nAI agents answer inventory questions, book test drives \
                      and schedule service around the clock.",
        challenges: &[
            Challenge {
                title: "Missed sales calls",
                description: "Shoppers call three dealers and buy from the first who answers.",
            },
            Challenge {
                title: "Service scheduling load",
                description: "Advisors spend hours on the phone booking routine maintenance.",
            },
            Challenge {
                title: "Slow internet lead follow-up",
                description: "Web leads go cold while they wait in a shared inbox.",
            },
        ],
        stats: &[
            Stat { value: "78%", label: "of buyers purchase from the first dealer to respond" },
            Stat { value: "30%", label: "of service calls go unanswered" },
            Stat { value: "5 min", label: "lead response target" },
        ],
        use_cases: &[
            "Test drive booking",
            "Service appointment scheduling",
            "Inventory and pricing questions",
            "Trade-in appraisal intake",
        ],
        faqs: &[
            Faq {
                question: "Can the agent check live inventory?",
                answer: "Yes. It connects to your DMS or inventory feed and answers with current stock.",
            },
            Faq {
                question: "Does it work with our service scheduler?",
                answer: "It books directly into common scheduling tools and confirms by text.",
            },
            Faq {
                question: "What happens when a buyer wants a person?",
                answer: "The call is transferred to the sales floor with a summary of the conversation.",
            },
        ],
    },
    Industry {
        slug: "healthcare",
        name: "Healthcare & Medical",
        headline: "Keep the front desk free for patients in the room",
        description: "Clinics field a constant stream of scheduling and insurance \
                      questions.\n\nAI agents handle booking, reminders and intake while \
                      **staying within your privacy policies**.",
        challenges: &[
            Challenge {
                title: "Phone queues",
                description: "Patients wait on hold while staff check people in.",
            },
            Challenge {
                title: "No-shows",
                description: "Missed appointments cost revenue and leave gaps in the day.",
            },
            Challenge {
                title: "Repetitive intake",
                description: "Staff re-key the same patient details for every visit.",
            },
        ],
        stats: &[
            Stat { value: "23%", label: "average no-show rate" },
            Stat { value: "8 min", label: "average hold time" },
            Stat { value: "40%", label: "fewer no-shows with reminders" },
        ],
        use_cases: &[
            "Appointment booking and rescheduling",
            "Reminder calls and texts",
            "Insurance pre-screening",
            "Prescription refill requests",
        ],
        faqs: &[
            Faq {
                question: "Is patient data protected?",
                answer: "Conversations are encrypted and handled under a signed business associate agreement.",
            },
            Faq {
                question: "Can it integrate with our EHR?",
                answer: "It integrates with major practice management and EHR systems.",
            },
            Faq {
                question: "Will it give medical advice?",
                answer: "No. Clinical questions are always routed to your staff.",
            },
        ],
    },
    Industry {
        slug: "real-estate",
        name: "Real Estate",
        headline: "Respond to every buyer and seller in seconds",
        description: "Agents juggle showings, listings and leads from a dozen portals.\n\n\
                      AI agents qualify inquiries, schedule showings and keep prospects \
                      warm until you are ready.",
        challenges: &[
            Challenge {
                title: "Lead overload",
                description: "Portal leads arrive faster than agents can call them back.",
            },
            Challenge {
                title: "Showing coordination",
                description: "Scheduling showings takes dozens of messages per property.",
            },
            Challenge {
                title: "Long nurture cycles",
                description: "Buyers take months to decide and need steady follow-up.",
            },
        ],
        stats: &[
            Stat { value: "48h", label: "average agent response time" },
            Stat { value: "21x", label: "more likely to convert within 5 minutes" },
            Stat { value: "6 months", label: "typical buyer journey" },
        ],
        use_cases: &[
            "Listing inquiries",
            "Showing scheduling",
            "Buyer and seller qualification",
            "Open house follow-up",
        ],
        faqs: &[
            Faq {
                question: "Which lead sources are supported?",
                answer: "Leads from major portals, your website and text messages flow into one pipeline.",
            },
            Faq {
                question: "Can it answer questions about specific listings?",
                answer: "Yes. It reads your MLS feed for price, features and availability.",
            },
            Faq {
                question: "Does it replace my assistant?",
                answer: "It takes the repetitive work so your assistant can focus on closings.",
            },
        ],
    },
    Industry {
        slug: "legal",
        name: "Legal Services",
        headline: "Sign more clients without more intake staff",
        description: "Potential clients call once and move on if nobody answers.\n\n\
                      AI intake screens cases, collects facts and books consultations \
                      with the right attorney.",
        challenges: &[
            Challenge {
                title: "Unanswered intake calls",
                description: "Calls outside office hours go to voicemail and never return.",
            },
            Challenge {
                title: "Unqualified consultations",
                description: "Attorneys spend billable time on cases the firm will not take.",
            },
            Challenge {
                title: "Conflict checks",
                description: "Intake details are scattered across notes and emails.",
            },
        ],
        stats: &[
            Stat { value: "42%", label: "of law firm calls go unanswered" },
            Stat { value: "67%", label: "of callers hire the first firm that responds" },
            Stat { value: "3x", label: "faster intake" },
        ],
        use_cases: &[
            "Case intake and screening",
            "Consultation booking",
            "Document collection",
            "Case status updates",
        ],
        faqs: &[
            Faq {
                question: "Is client information confidential?",
                answer: "All conversations are encrypted and stored in your own practice tools.",
            },
            Faq {
                question: "Can it screen by practice area?",
                answer: "Yes. Screening questions are configured per practice area.",
            },
            Faq {
                question: "Does it give legal advice?",
                answer: "No. It gathers facts and schedules time with an attorney.",
            },
        ],
    },
    Industry {
        slug: "restaurants",
        name: "Restaurants & Food Service",
        headline: "Take reservations and orders while the kitchen is slammed",
        description: "The phone rings hardest during the dinner rush.\n\n\
                      AI agents take reservations, answer menu questions and capture \
                      takeout orders without pulling staff off the floor.",
        challenges: &[
            Challenge {
                title: "Rush-hour calls",
                description: "Hosts cannot answer the phone and seat guests at the same time.",
            },
            Challenge {
                title: "Order errors",
                description: "Phone orders taken in a hurry come back wrong.",
            },
            Challenge {
                title: "Staff turnover",
                description: "New hires need weeks to learn the menu and policies.",
            },
        ],
        stats: &[
            Stat { value: "1 in 4", label: "calls missed during peak hours" },
            Stat { value: "15%", label: "higher average ticket on AI orders" },
            Stat { value: "24/7", label: "reservation line" },
        ],
        use_cases: &[
            "Reservations and waitlists",
            "Takeout and catering orders",
            "Menu and allergen questions",
            "Private event inquiries",
        ],
        faqs: &[
            Faq {
                question: "Does it connect to our POS?",
                answer: "Orders are sent to supported POS systems or printed in the kitchen.",
            },
            Faq {
                question: "Can it handle allergen questions?",
                answer: "It answers from the allergen information you provide and flags uncertain cases.",
            },
            Faq {
                question: "Will it upsell?",
                answer: "You can configure suggested add-ons and specials.",
            },
        ],
    },
    Industry {
        slug: "home-services",
        name: "Home Services",
        headline: "Book the job before the customer calls a competitor",
        description: "Plumbers, electricians and HVAC crews are on job sites, not at a \
                      desk.\n\nAI agents answer emergencies, quote common jobs and fill \
                      the schedule.",
        challenges: &[
            Challenge {
                title: "Calls from the field",
                description: "Technicians cannot answer while working.",
            },
            Challenge {
                title: "Emergency triage",
                description: "Urgent calls get lost among routine requests.",
            },
            Challenge {
                title: "Dispatch juggling",
                description: "Scheduling across crews happens on paper and group texts.",
            },
        ],
        stats: &[
            Stat { value: "62%", label: "of calls to home service businesses go unanswered" },
            Stat { value: "$1,200", label: "average value of a missed job" },
            Stat { value: "85%", label: "of callers do not leave a voicemail" },
        ],
        use_cases: &[
            "Emergency call triage",
            "Estimate scheduling",
            "Maintenance plan renewals",
            "Review requests after jobs",
        ],
        faqs: &[
            Faq {
                question: "Can it tell an emergency from a routine request?",
                answer: "Yes. Emergency keywords trigger an immediate transfer or page to the on-call tech.",
            },
            Faq {
                question: "Does it work with our field service software?",
                answer: "It books into common field service platforms.",
            },
            Faq {
                question: "Can it give price ranges?",
                answer: "It quotes the ranges you configure for standard jobs.",
            },
        ],
    },
    Industry {
        slug: "insurance",
        name: "Insurance",
        headline: "Quote faster and keep policyholders informed",
        description: "Agencies compete on speed to quote and quality of service.\n\n\
                      AI agents gather quote details, answer coverage questions and \
                      start claims intake at any hour.",
        challenges: &[
            Challenge {
                title: "Slow quoting",
                description: "Collecting risk details takes several back-and-forth calls.",
            },
            Challenge {
                title: "Renewal churn",
                description: "Policyholders shop around when nobody reaches out before renewal.",
            },
            Challenge {
                title: "Claims surges",
                description: "Storms bring call volumes no team can staff for.",
            },
        ],
        stats: &[
            Stat { value: "50%", label: "faster quote turnaround" },
            Stat { value: "18%", label: "better renewal retention" },
            Stat { value: "10x", label: "claim call capacity during surges" },
        ],
        use_cases: &[
            "Quote intake",
            "First notice of loss",
            "Renewal outreach",
            "Policy questions",
        ],
        faqs: &[
            Faq {
                question: "Can it bind policies?",
                answer: "No. It collects details and hands a complete quote request to a licensed agent.",
            },
            Faq {
                question: "Does it integrate with our agency management system?",
                answer: "It syncs with common agency management systems.",
            },
            Faq {
                question: "How does it handle claims calls?",
                answer: "It records first notice of loss details and routes them to your claims team.",
            },
        ],
    },
    Industry {
        slug: "financial-services",
        name: "Financial Services",
        headline: "Responsive client service without a bigger back office",
        description: "Advisors and lenders spend too much time on status updates and \
                      document chasing.\n\nAI agents answer routine questions and collect \
                      paperwork so advisors can advise.",
        challenges: &[
            Challenge {
                title: "Document collection",
                description: "Applications stall waiting on missing paperwork.",
            },
            Challenge {
                title: "Status inquiries",
                description: "Clients call repeatedly to check on their application.",
            },
            Challenge {
                title: "Compliance",
                description: "Every conversation must follow approved language.",
            },
        ],
        stats: &[
            Stat { value: "30%", label: "shorter application cycle" },
            Stat { value: "60%", label: "fewer status calls to staff" },
            Stat { value: "100%", label: "of conversations logged" },
        ],
        use_cases: &[
            "Loan application intake",
            "Document reminders",
            "Appointment booking with advisors",
            "Account status questions",
        ],
        faqs: &[
            Faq {
                question: "Are conversations recorded for compliance?",
                answer: "Every conversation is logged and exportable for review.",
            },
            Faq {
                question: "Will it give investment advice?",
                answer: "No. It sticks to approved scripts and routes advice questions to advisors.",
            },
            Faq {
                question: "Can clients upload documents?",
                answer: "Clients receive a secure link to upload documents during or after the conversation.",
            },
        ],
    },
    Industry {
        slug: "retail",
        name: "Retail & E-commerce",
        headline: "Answer shoppers instantly and recover lost sales",
        description: "Shoppers expect immediate answers about stock, shipping and \
                      returns.\n\nAI agents handle the questions and nudge carts to \
                      checkout.",
        challenges: &[
            Challenge {
                title: "Where-is-my-order volume",
                description: "Order status questions swamp the support inbox.",
            },
            Challenge {
                title: "Abandoned carts",
                description: "Most carts are left behind without a follow-up.",
            },
            Challenge {
                title: "Seasonal peaks",
                description: "Holiday traffic outgrows the support team.",
            },
        ],
        stats: &[
            Stat { value: "70%", label: "of carts are abandoned" },
            Stat { value: "45%", label: "of support tickets are order status" },
            Stat { value: "12%", label: "recovered cart revenue" },
        ],
        use_cases: &[
            "Order tracking",
            "Returns and exchanges",
            "Product questions",
            "Cart recovery messages",
        ],
        faqs: &[
            Faq {
                question: "Does it connect to our store platform?",
                answer: "It reads orders and products from popular e-commerce platforms.",
            },
            Faq {
                question: "Can it process returns?",
                answer: "It starts returns according to your policy and emails the label.",
            },
            Faq {
                question: "Does it work in stores too?",
                answer: "It can answer the store phone line for hours, stock and pickup questions.",
            },
        ],
    },
    Industry {
        slug: "hospitality",
        name: "Hospitality & Hotels",
        headline: "Concierge-level service at every hour",
        description: "Guests call and message at all hours with bookings and requests.\n\n\
                      AI agents handle reservations, answer amenity questions and pass \
                      requests to the right department.",
        challenges: &[
            Challenge {
                title: "Front desk overload",
                description: "Check-in lines and ringing phones compete for the same staff.",
            },
            Challenge {
                title: "Lost direct bookings",
                description: "Unanswered calls push guests to third-party booking sites.",
            },
            Challenge {
                title: "Multilingual guests",
                description: "Travellers need help in their own language.",
            },
        ],
        stats: &[
            Stat { value: "20%", label: "more direct bookings" },
            Stat { value: "30+", label: "languages supported" },
            Stat { value: "24/7", label: "guest support" },
        ],
        use_cases: &[
            "Reservation booking and changes",
            "Amenity and local questions",
            "Housekeeping and room service requests",
            "Group and event inquiries",
        ],
        faqs: &[
            Faq {
                question: "Does it integrate with our PMS?",
                answer: "It checks availability and books through supported property management systems.",
            },
            Faq {
                question: "Can it speak other languages?",
                answer: "It detects the caller's language and responds in kind.",
            },
            Faq {
                question: "How are guest requests delivered?",
                answer: "Requests are sent to the right department by text, email or ticket.",
            },
        ],
    },
];
