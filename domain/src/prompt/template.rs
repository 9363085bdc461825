//! Prompt templates for the scripture query pipeline

use crate::answer::IRRELEVANT_QUESTION_MESSAGE;
use crate::scripture::source::SourceTag;
use crate::scripture::verse::Verse;

/// Placeholder given to the summarizer when no verse was found
pub const NO_VERSES_PLACEHOLDER: &str = "No verses found in DB. Please use your own knowledge.";

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// Prompt asking the model for 3-5 relevant verse identifiers.
    ///
    /// Returns `None` for sources without a verse store, which have no
    /// identifier format to ask for.
    pub fn verse_ids(question: &str, source: SourceTag) -> Option<String> {
        let id_format = source.verse_id_format()?;
        let examples = source
            .example_verse_ids()
            .iter()
            .map(|id| format!("\"{}\"", id))
            .collect::<Vec<_>>()
            .join(", ");
        let book = source.book_name();

        Some(format!(
            r#"You are an assistant that finds relevant verses from the {book}.
The verse IDs are formatted like this: {id_format}.

IMPORTANT RULES:
1. If the user's question is NOT about the teachings, stories, or concepts within the {book}, you MUST return an empty array.
2. If the user's question is about comparing the religion of the {book} with other religions, you MUST return an empty array.
3. Questions about modern celebrities, sports, politics, nonsense, or topics from a different religion are irrelevant.

User question: "{question}"

Return ONLY a JSON object with the key "verses" holding an array of the top 3-5 most relevant verse IDs.
If the question is irrelevant, the array must be empty.
Do not include any explanation or extra text.

Example:
{{
  "verses": [{examples}]
}}"#
        ))
    }

    /// Format verses as `chapter:verse` blocks for the single-source prompt
    pub fn format_verses(verses: &[Verse]) -> String {
        verses
            .iter()
            .map(|v| format!("{}\n{}", v.citation(), v.meaning))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Prompt asking for a plain-text explanation grounded in the verses.
    ///
    /// With an empty batch the model is told to use its own knowledge.
    pub fn single_source(question: &str, verses: &[Verse], source_name: &str) -> String {
        let formatted = if verses.is_empty() {
            NO_VERSES_PLACEHOLDER.to_string()
        } else {
            Self::format_verses(verses)
        };

        format!(
            r#"You are an assistant that explains teachings from the {source_name}.

CRITICAL FORMATTING RULES:
1. Your entire response MUST be plain text. Do not use markdown such as asterisks (*) for bold or emphasis.
2. The main title and the title of each numbered point must be enclosed in double quotes.
3. The explanation must be a numbered list. This is a strict rule.
4. Follow the exact structure of the example below.

CONTENT RULES (apply in this order):
1. Filter gibberish and irrelevance first: if the question is nonsense (e.g. "sbsjbf"), off-topic (e.g. a sports star, a different religion), or asks for a comparison between religions, you MUST return an empty array.
2. Expand keywords: if the question is a single meaningful keyword (e.g. "life", "karma", "birth"), treat it as a full topic, e.g. "life" becomes "What are the teachings about life?".
3. Answer full questions: if the question is a full, relevant question, give a comprehensive answer.
4. You may answer questions about characters within the {source_name}, but do not answer ambiguous questions.

EXAMPLE OF THE REQUIRED FORMAT:
"Main Title of the Explanation"

This is an introductory paragraph explaining the overall concept.

1. "Title for Point One": This is the detailed text for the first point.
2. "Title for Point Two": This is the detailed text for the second point.

---
User question: "{question}"

Relevant verses:
{formatted}

Provide a comprehensive explanation based on the question and the verses, strictly following all rules above."#
        )
    }

    /// Prompt asking for the structured three-tradition comparison.
    ///
    /// Christianity never has fetched verses; its section always comes from
    /// the model's background knowledge.
    pub fn comparative(question: &str, gita: &[Verse], quran: &[Verse]) -> String {
        let gita_data = Self::verse_data(gita, SourceTag::Gita);
        let quran_data = Self::verse_data(quran, SourceTag::Quran);

        format!(
            r#"CRITICAL RULE: Your primary task is to decide whether the user's question, "{question}", is directly related to the teachings, stories, or concepts within the religious texts of Hinduism (Bhagavad Gita), Islam (Quran), or Christianity (Bible).

If the question is about a modern political figure, a celebrity, sports, or any other topic NOT found in these scriptures, you MUST IGNORE all other instructions and respond ONLY with this JSON object:
{{
  "error": "{IRRELEVANT_QUESTION_MESSAGE}"
}}

If the question IS relevant, generate a detailed, multi-layered JSON response with this structure:
- "topic": A short title for the user's question.
- "commonGround": A list of 5 single-word universal themes.
- "results": One object per religion (Hinduism, Islam, and Christianity).
  - Each religion object must contain "religion", "overallSummary", "perspectives" (each with "perspectiveName", "summary", "adherencePercentage"), and "sharedConcepts".

BHAGAVAD GITA DATA:
{gita_data}

QURAN DATA:
{quran_data}

BIBLE DATA:
No specific verses found. Please use your general knowledge of the Bible to answer for Christianity.

Respond with ONLY the raw JSON object, without any markdown or extra text."#
        )
    }

    fn verse_data(verses: &[Verse], source: SourceTag) -> String {
        if verses.is_empty() {
            return format!(
                "No specific verses found. Please use your general knowledge of the {}.",
                source.display_name()
            );
        }
        serde_json::to_string_pretty(verses).unwrap_or_else(|_| "[]".to_string())
    }
}
