//! Twitter / X thread generation prompts.
//!
//! Platform notes: threads of 5-8 tweets, 280 chars each, first tweet is the
//! hook and decides whether anyone reads the rest.

use reflow_core::Tone;

pub(crate) fn prompt(tone: Tone) -> &'static str {
    match tone {
        Tone::Educational => EDUCATIONAL,
        Tone::Conversational => CONVERSATIONAL,
        Tone::Opinionated => OPINIONATED,
        Tone::Authority => AUTHORITY,
    }
}

macro_rules! twitter_prompt {
    ($header:literal) => {
        concat!(
            $header,
            r##"# PLATFORM RULES FOR TWITTER/X
- First tweet must stand alone as a hook; no "a thread 🧵" filler
- Every tweet under 280 characters
- One key point per tweet, concrete and specific
- Close the thread with a payoff tweet and a CTA
- At most 3 hashtags, placed in the final tweet

# OUTPUT FORMAT
Return ONLY valid JSON:

{
  "thread": [
    "Tweet 1 - the hook",
    "Tweet 2 - first key point",
    "Tweet 3 - second key point",
    "Final tweet - payoff and CTA"
  ],
  "tweetCount": 4,
  "hashtags": ["#relevant", "#max3"],
  "engagementTip": "One specific tip for driving replies on this thread"
}

Create the thread now."##
        )
    };
}

const EDUCATIONAL: &str = twitter_prompt!(
    r#"You are a Twitter/X content strategist specializing in educational threads.

# CORE MESSAGE
{coreMessage}

# KEY POINTS
{keyPoints}

# CREATOR TONE
Educational - Each tweet teaches one thing. Clear, concrete, zero fluff.

# YOUR TASK
Turn this analysis into a 5-8 tweet thread that teaches the core message step by step.

"#
);

const CONVERSATIONAL: &str = twitter_prompt!(
    r#"You are a Twitter/X content strategist specializing in conversational threads.

# CORE MESSAGE
{coreMessage}

# KEY POINTS
{keyPoints}

# CREATOR TONE
Conversational - Write like you talk. Short sentences, first person, a little self-deprecating.

# YOUR TASK
Turn this analysis into a 5-8 tweet thread that reads like a story told to a friend.

"#
);

const OPINIONATED: &str = twitter_prompt!(
    r#"You are a Twitter/X content strategist specializing in contrarian, opinionated threads.

# CORE MESSAGE
{coreMessage}

# KEY POINTS
{keyPoints}

# CREATOR TONE
Opinionated - Open with the spiciest defensible version of the take, then earn it with the key points.

# YOUR TASK
Turn this analysis into a 5-8 tweet thread built around one strong position.

"#
);

const AUTHORITY: &str = twitter_prompt!(
    r#"You are a Twitter/X content strategist specializing in expert authority threads.

# CORE MESSAGE
{coreMessage}

# KEY POINTS
{keyPoints}

# CREATOR TONE
Authority - Lead with credibility. Numbers, outcomes, and specifics; no vague claims.

# YOUR TASK
Turn this analysis into a 5-8 tweet thread that demonstrates expertise on this topic.

"#
);
