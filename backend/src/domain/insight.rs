//! Deterministic insight templates for the fallback classifier.
//!
//! Each aesthetic owns six templates: two empathetic (scores up to 30), two
//! neutral (31 to 60) and two enthusiastic (61 and above). The parity of the
//! mood text's first character picks between the pair, so the same inputs
//! always yield the same sentence.

use super::{AestheticKey, VibeScore};

type TemplateTable = [&'static str; 6];

const EMPATHETIC_MAX: i32 = 30;
const NEUTRAL_MAX: i32 = 60;
const EMPTY_TEXT_INDEX: usize = 2;

/// Pick the insight for an aesthetic, score and original mood text.
///
/// # Examples
/// ```
/// use vibecheck::domain::{AestheticKey, VibeScore, insight_for};
///
/// let score = VibeScore::clamped(80);
/// let first = insight_for(AestheticKey::Cozy, score, "warm tea");
/// assert_eq!(first, insight_for(AestheticKey::Cozy, score, "warm tea"));
/// ```
pub fn insight_for(aesthetic: AestheticKey, score: VibeScore, mood_text: &str) -> &'static str {
    let table = templates(aesthetic);
    let index = template_index(score, mood_text);
    table.get(index).copied().unwrap_or(table[EMPTY_TEXT_INDEX])
}

fn template_index(score: VibeScore, mood_text: &str) -> usize {
    let Some(first) = mood_text.chars().next() else {
        return EMPTY_TEXT_INDEX;
    };
    let bucket_start = match score.value() {
        value if value <= EMPATHETIC_MAX => 0,
        value if value <= NEUTRAL_MAX => 2,
        _ => 4,
    };
    let parity = usize::from(u32::from(first) % 2 == 1);
    bucket_start + parity
}

fn templates(aesthetic: AestheticKey) -> &'static TemplateTable {
    match aesthetic {
        AestheticKey::Chill => &CHILL,
        AestheticKey::Energetic => &ENERGETIC,
        AestheticKey::Romantic => &ROMANTIC,
        AestheticKey::Melancholy => &MELANCHOLY,
        AestheticKey::Adventurous => &ADVENTUROUS,
        AestheticKey::Creative => &CREATIVE,
        AestheticKey::Peaceful => &PEACEFUL,
        AestheticKey::Confident => &CONFIDENT,
        AestheticKey::Cozy => &COZY,
        AestheticKey::Mysterious => &MYSTERIOUS,
    }
}

const CHILL: TemplateTable = [
    "Even your calm feels heavy today. Slow is still moving.",
    "Low tide days happen. Let yourself drift for a bit.",
    "You're cruising at your own pace, and that's a good place to be.",
    "Steady and unbothered. Keep the volume low and the vibes easy.",
    "Peak chill unlocked. Nothing can rush you today.",
    "You're radiating laid-back energy. Everyone around you benefits.",
];

const ENERGETIC: TemplateTable = [
    "Restless energy with nowhere to land. Try moving your body a little.",
    "Your battery is buzzing but drained. Short bursts, long breaks.",
    "There's a spark in you today. Point it at one thing.",
    "Charged up and ready. Pace yourself so it lasts until tonight.",
    "You're running at full voltage. Go make something happen.",
    "Main-event energy. Today is yours to set on fire.",
];

const ROMANTIC: TemplateTable = [
    "Missing someone hurts because the connection was real.",
    "Your heart is tender today. Be as gentle with it as you'd be with theirs.",
    "Soft heart, open mind. Let the feelings take their time.",
    "A little bit of longing, a little bit of hope. Classic romantic.",
    "Love is in the air and you're breathing it all in.",
    "Butterflies confirmed. Enjoy every fluttery second.",
];

const MELANCHOLY: TemplateTable = [
    "It's okay to not be okay. Today only asks you to get through it.",
    "Heavy days pass. Reach out to someone who feels like home.",
    "A quiet, grey kind of day. Rainy moods make room for reflection.",
    "Feeling a bit blue is part of the full spectrum. Be kind to yourself.",
    "Even melancholy has its beauty, and you're seeing it clearly.",
    "Bittersweet but grounded. You're feeling deeply and still standing.",
];

const ADVENTUROUS: TemplateTable = [
    "The itch to escape is loud today. Even a short walk counts.",
    "Feeling stuck is just the map before the journey.",
    "Curiosity is pulling at you. Follow it somewhere small.",
    "The horizon is calling. Say yes to one unplanned thing.",
    "Full explorer mode. The world is your side quest today.",
    "Wild heart, open road. Go collect a new story.",
];

const CREATIVE: TemplateTable = [
    "Blocked days are still part of the process. Rest the muse.",
    "Nothing flowing yet, and that's fine. Doodle without a goal.",
    "Ideas are simmering. Write one down before it floats away.",
    "You're in sketch mode. Rough drafts are where the magic hides.",
    "You're in the flow. Protect this energy and create freely.",
    "Inspiration overload. Make the thing before the feeling fades.",
];

const PEACEFUL: TemplateTable = [
    "Peace can be hard to find today. Start with one slow breath.",
    "Your mind is loud, but stillness is still there underneath.",
    "A calm, centred kind of day. Hold onto this balance.",
    "Quiet and content. Sometimes that is the whole point.",
    "Inner peace unlocked. You're grounded and glowing.",
    "Gratitude looks good on you. Let it carry you through the day.",
];

const CONFIDENT: TemplateTable = [
    "Confidence is quiet today. You don't have to prove anything.",
    "Even main characters have off days. The plot isn't over.",
    "You're holding your own. Stand a little taller.",
    "Solid and self-assured. Trust the work you've put in.",
    "Main character energy fully activated. Go take your spotlight.",
    "You're unstoppable today. Walk in like you own the room.",
];

const COZY: TemplateTable = [
    "Wrap yourself in something warm. You deserve a soft landing.",
    "When the world feels cold, make your corner warm.",
    "Blanket, warm drink, good company. A proper cozy day.",
    "Homebody mode engaged. Comfort is a valid plan.",
    "Peak cozy season. Every little comfort feels like a hug.",
    "Warm and glowing. Your happy place is wherever you are.",
];

const MYSTERIOUS: TemplateTable = [
    "The dark thoughts feel loud tonight. You don't have to solve them alone.",
    "Lost in the deep end. Come up for air when you need it.",
    "Your mind is wandering somewhere interesting. Follow the thread.",
    "Contemplative and curious. The night suits you.",
    "Enigmatic and electric. You're seeing what others miss.",
    "Deep-thinker energy at full power. Dream big tonight.",
];
