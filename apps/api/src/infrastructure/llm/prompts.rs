use super::traits::{IssueReport, SummaryRequest};

pub fn representative_summary_prompt(request: &SummaryRequest) -> String {
    let issue_context = request
        .issue_category
        .as_deref()
        .map(|category| format!(" particularly regarding {} issues", category))
        .unwrap_or_default();

    format!(
        "You are helping an Indian citizen understand who represents them.\n\
         In one short paragraph (max 100 words), explain that the MLA {mla} represents \
         the assembly constituency {constituency} in district {district}, state Maharashtra{issue_context}, \
         and what type of local issues they typically handle.\n\n\
         Do not hallucinate phone numbers or emails; only talk about roles and responsibilities.\n\
         Keep it factual, helpful, and encouraging for civic engagement.",
        mla = request.mla_name,
        constituency = request.assembly_constituency,
        district = request.district,
    )
}

pub fn action_plan_prompt(issue: &IssueReport) -> String {
    format!(
        "You are a civic action assistant. A user has reported a civic issue.\n\
         Category: {category}\n\
         Description: {description}\n\n\
         Please generate:\n\
         1. A concise WhatsApp message (max 200 chars) that can be sent to authorities.\n\
         2. A formal but firm email subject.\n\
         3. A formal email body (max 150 words) addressed to the relevant authority \
         (e.g., Municipal Commissioner, Police, etc. based on category).\n\n\
         Return the response in strictly valid JSON format with keys: \"whatsapp\", \"email_subject\", \"email_body\".\n\
         Do not use markdown code blocks. Just the raw JSON string.",
        category = issue.category,
        description = issue.description,
    )
}

pub fn civic_chat_prompt(query: &str) -> String {
    format!(
        "You are a helpful civic assistant for Indian citizens.\n\
         User Query: {query}\n\n\
         Answer the user's question about civic issues, government services, or local administration.\n\
         If they ask about specific MLAs, tell them to use the \"Find My MLA\" feature.\n\
         Keep answers concise and helpful."
    )
}
