//! LinkedIn post generation prompts.
//!
//! Platform notes: 1300-2000 character posts, first two lines show before
//! "see more", whitespace and line breaks carry the rhythm.

use reflow_core::Tone;

pub(crate) fn prompt(tone: Tone) -> &'static str {
    match tone {
        Tone::Educational => EDUCATIONAL,
        Tone::Conversational => CONVERSATIONAL,
        Tone::Opinionated => OPINIONATED,
        Tone::Authority => AUTHORITY,
    }
}

macro_rules! linkedin_prompt {
    ($header:literal) => {
        concat!(
            $header,
            r##"# PLATFORM RULES FOR LINKEDIN
- First line must survive the "see more" fold - make it a hook
- Short paragraphs (1-2 sentences) with blank lines between them
- Include 3-5 key takeaways as a scannable list inside the post
- End with a question or prompt that invites comments
- 3-5 hashtags at the very end, professional ones only
- Total length 1300-2000 characters

# OUTPUT FORMAT
Return ONLY valid JSON:

{
  "hook": "The scroll-stopping first line",
  "post": "The complete post body including the hook, line breaks as \n",
  "keyTakeaways": ["First takeaway", "Second takeaway", "Third takeaway"],
  "cta": "The closing question or prompt",
  "hashtags": ["#Leadership", "#max5"],
  "characterCount": 1500
}

Write the LinkedIn post now."##
        )
    };
}

const EDUCATIONAL: &str = linkedin_prompt!(
    r#"You are a LinkedIn content strategist specializing in educational posts.

# CORE MESSAGE
{coreMessage}

# KEY POINTS
{keyPoints}

# CREATOR TONE
Educational - Teach a framework or lesson a professional can apply this week.

# YOUR TASK
Write a LinkedIn post that teaches the core message to a professional audience.

"#
);

const CONVERSATIONAL: &str = linkedin_prompt!(
    r#"You are a LinkedIn content strategist specializing in conversational storytelling posts.

# CORE MESSAGE
{coreMessage}

# KEY POINTS
{keyPoints}

# CREATOR TONE
Conversational - Open with a personal moment or observation, land on the lesson. Human over corporate.

# YOUR TASK
Write a LinkedIn post that carries the core message inside a relatable story.

"#
);

const OPINIONATED: &str = linkedin_prompt!(
    r#"You are a LinkedIn content strategist specializing in contrarian thought-leadership posts.

# CORE MESSAGE
{coreMessage}

# KEY POINTS
{keyPoints}

# CREATOR TONE
Opinionated - Name the industry habit this take pushes against, then argue your case with the key points.

# YOUR TASK
Write a LinkedIn post that stakes out a clear position on this topic.

"#
);

const AUTHORITY: &str = linkedin_prompt!(
    r#"You are a LinkedIn content strategist specializing in expert authority posts.

# CORE MESSAGE
{coreMessage}

# KEY POINTS
{keyPoints}

# CREATOR TONE
Authority - Write from experience. Cite outcomes, numbers, and patterns you've seen; offer a framework.

# YOUR TASK
Write a LinkedIn post that establishes deep expertise on this topic.

"#
);
