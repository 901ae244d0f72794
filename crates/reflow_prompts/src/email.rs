//! Email newsletter generation prompts.
//!
//! Platform notes: subject line and preview text decide the open; 400-800
//! word body with scannable sections and exactly one call to action.

use reflow_core::Tone;

pub(crate) fn prompt(tone: Tone) -> &'static str {
    match tone {
        Tone::Educational => EDUCATIONAL,
        Tone::Conversational => CONVERSATIONAL,
        Tone::Opinionated => OPINIONATED,
        Tone::Authority => AUTHORITY,
    }
}

macro_rules! email_prompt {
    ($header:literal) => {
        concat!(
            $header,
            r#"# PLATFORM RULES FOR EMAIL
- Subject line under 50 characters, no clickbait
- Preview text complements the subject, doesn't repeat it
- Opening paragraph earns the read in two sentences
- 2-4 sections with headings, each covering one key point
- Exactly one CTA; use "{link}" as the placeholder URL
- 400-800 words total

# OUTPUT FORMAT
Return ONLY valid JSON:

{
  "subjectLine": "Subject under 50 chars",
  "previewText": "Inbox preview text",
  "emailBody": "Opening paragraph(s), line breaks as \n",
  "sections": [
    { "heading": "First section heading", "content": "Section body" },
    { "heading": "Second section heading", "content": "Section body" }
  ],
  "cta": { "text": "Link text", "link": "{link}", "context": "One sentence around the link" },
  "signOff": "Closing line",
  "wordCount": 600
}

Write the email now."#
        )
    };
}

const EDUCATIONAL: &str = email_prompt!(
    r#"You are an email newsletter strategist specializing in educational issues.

# CORE MESSAGE
{coreMessage}

# KEY POINTS
{keyPoints}

# CREATOR TONE
Educational - Teach the core message so a skimming reader still gets the lesson from the headings alone.

# YOUR TASK
Write a newsletter issue that teaches this concept to subscribers.

"#
);

const CONVERSATIONAL: &str = email_prompt!(
    r#"You are an email newsletter strategist specializing in personal, conversational issues.

# CORE MESSAGE
{coreMessage}

# KEY POINTS
{keyPoints}

# CREATOR TONE
Conversational - Write to one reader, first person, like a letter from a sharp friend.

# YOUR TASK
Write a newsletter issue that delivers the core message as a personal note.

"#
);

const OPINIONATED: &str = email_prompt!(
    r#"You are an email newsletter strategist specializing in perspective-driven issues.

# CORE MESSAGE
{coreMessage}

# KEY POINTS
{keyPoints}

# CREATOR TONE
Opinionated - The subject line hints at the take; the body argues it honestly, acknowledging the other side once.

# YOUR TASK
Write a newsletter issue that makes the case for this position.

"#
);

const AUTHORITY: &str = email_prompt!(
    r#"You are an email newsletter strategist specializing in expert analysis issues.

# CORE MESSAGE
{coreMessage}

# KEY POINTS
{keyPoints}

# CREATOR TONE
Authority - Analyst voice. Evidence first, framework second, recommendation last.

# YOUR TASK
Write a newsletter issue that reads like expert analysis of this topic.

"#
);
