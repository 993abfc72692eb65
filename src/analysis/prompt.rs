use super::AnalyzeRequest;

pub const SYSTEM_PROMPT: &str = r#"You are EcoTrack, an AI assistant built for BPI to evaluate SMEs on ESG (Environmental, Social, and Governance).

You must only use real, verifiable sources. Never invent or fabricate URLs, titles, or publishers.
If no source is found, clearly say "insufficient evidence."

Rules:
- Cite only from valid URLs that can be retrieved. Do not generate imaginary links.
- If a source is not credible (e.g., anonymous blog, broken link), omit it.
- Abstain when evidence is insufficient; do not guess.
- Each ESG score must be traceable to specific sources.
- Prefer recent sources (within last 36 months) and credible domains (news, gov, NGO, reputable business media).
- Keep tone professional, concise, and neutral.
- Output strictly in JSON (no extra commentary)."#;

/// Placeholder the model is told to use for pillars without evidence.
pub const INSUFFICIENT_EVIDENCE: &str = "Insufficient evidence.";

const UNKNOWN_BUSINESS_TYPE: &str = "Unknown";

pub fn build_user_prompt(request: &AnalyzeRequest) -> String {
    let company = request.company_name.as_str();
    let business_type = if request.business_type.trim().is_empty() {
        UNKNOWN_BUSINESS_TYPE
    } else {
        request.business_type.as_str()
    };

    format!(
        r#"The company is: {company}
Business type: {business_type}

Your tasks:
1. Identify 1-5 recent, real, relevant sources about this company (news, reports, announcements).
   - Each must have: title, URL, publisher, publish_date, and a short summary.
   - Skip duplicates or irrelevant results.
2. For each source, decide which ESG categories (Environmental, Social, Governance) it informs.
3. For each relevant category, assign a score from 0-100 and provide one-sentence reasoning tied directly to the text.
4. Aggregate the source-level contributions into final ESG scores (E, S, G), balancing credibility and recency.
5. Write a short summary of the company's overall ESG performance.

Output JSON structure:
{{
  "company": "{company}",
  "business_type": "{business_type}",
  "summary": "Short ESG summary",
  "esg_scores": {{
    "environmental": {{
      "score": 0,
      "description": "Environmental performance summary"
    }},
    "social": {{
      "score": 0,
      "description": "Social performance summary"
    }},
    "governance": {{
      "score": 0,
      "description": "Governance performance summary"
    }}
  }},
  "sources": [
    {{
      "title": "Source Title",
      "url": "https://source-link.com",
      "publisher": "Publisher Name",
      "published_date": "YYYY-MM-DD",
      "summary": "Brief article summary",
      "relevance": ["environmental", "social"],
      "contributions": {{
        "environmental": {{
          "score": 70,
          "reasoning": "Highlights new waste reduction targets"
        }},
        "social": {{
          "score": 55,
          "reasoning": "Mentions employee welfare programs"
        }}
      }}
    }}
  ]
}}

Constraints:
- If no valid sources are found for a pillar, leave that pillar's score 0 and description "{INSUFFICIENT_EVIDENCE}"
- Do not include categories not mentioned in the source.
- Keep total sources between 4-6.
- All reasoning must be grounded in actual text from the source."#
    )
}
