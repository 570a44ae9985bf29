//! The built-in post templates.
//!
//! Bodies use `{name}` placeholders; every name appearing in a body is
//! declared in the template's variable list.

use super::catalog::Template;

fn template(
    id: &str,
    title: &str,
    category: &str,
    icon: &str,
    description: &str,
    body: &str,
    variables: &[&str],
) -> Template {
    Template {
        id: id.to_string(),
        title: title.to_string(),
        category: category.to_string(),
        icon: icon.to_string(),
        description: description.to_string(),
        body: body.to_string(),
        variable_names: variables.iter().map(|v| v.to_string()).collect(),
    }
}

pub(super) fn builtin_templates() -> Vec<Template> {
    vec![
        template(
            "job-announcement",
            "New Job Announcement",
            "Career",
            "🎉",
            "Announce your new job or role",
            "I'm thrilled to announce that I'm starting a new position as {role} at {company}! 🎉\n\nAfter {experience}, I'm excited to bring my skills in {skills} to this incredible team.\n\n{company} is doing amazing work in {industry}, and I can't wait to contribute to {goals}.\n\nA huge thank you to everyone who supported me on this journey. Looking forward to this new chapter! 🚀\n\n{cta}",
            &["role", "company", "experience", "skills", "industry", "goals", "cta"],
        ),
        template(
            "product-launch",
            "Product Launch",
            "Business",
            "🚀",
            "Announce a new product or feature",
            "Big news! We're launching {product}! 🚀\n\nAfter {timeframe} of hard work, we're finally ready to share {product} with the world.\n\nWhat makes it special?\n✨ {feature1}\n✨ {feature2}\n✨ {feature3}\n\nWe built this to solve {problem} for {audience}.\n\n{cta}\n\nWhat do you think? Drop your thoughts in the comments! 👇",
            &["product", "timeframe", "feature1", "feature2", "feature3", "problem", "audience", "cta"],
        ),
        template(
            "achievement",
            "Celebrate Achievement",
            "Personal",
            "🏆",
            "Share a personal or team achievement",
            "Proud moment! {achievement} 🏆\n\n{backstory}\n\nThis wouldn't have been possible without:\n• {person1}\n• {person2}\n• {person3}\n\nKey learnings:\n1️⃣ {learning1}\n2️⃣ {learning2}\n3️⃣ {learning3}\n\n{reflection}\n\nWhat's your biggest win this {timeframe}? 💪",
            &["achievement", "backstory", "person1", "person2", "person3", "learning1", "learning2", "learning3", "reflection", "timeframe"],
        ),
        template(
            "thought-leadership",
            "Thought Leadership",
            "Insights",
            "💡",
            "Share insights and expertise",
            "{hook}\n\nI've been thinking a lot about {topic} lately, and here's what I've learned:\n\n{insight1}\n\n{insight2}\n\n{insight3}\n\nThe key takeaway? {takeaway}\n\nThis matters because {why_it_matters}\n\nWhat's your take on this? Do you agree or disagree? \n\nLet's discuss in the comments 👇",
            &["hook", "topic", "insight1", "insight2", "insight3", "takeaway", "why_it_matters"],
        ),
        template(
            "event-recap",
            "Event Recap",
            "Events",
            "🎤",
            "Share highlights from an event",
            "Just wrapped up {event}! What an incredible experience 🎤\n\nHere are my top {number} takeaways:\n\n1️⃣ {takeaway1}\n2️⃣ {takeaway2}\n3️⃣ {takeaway3}\n\nHighlight moments:\n✨ {highlight1}\n✨ {highlight2}\n\nGrateful to have connected with so many amazing people including {mentions}.\n\nAlready looking forward to next year! 🙌\n\nWere you there? What was your favorite part?",
            &["event", "number", "takeaway1", "takeaway2", "takeaway3", "highlight1", "highlight2", "mentions"],
        ),
        template(
            "asking-advice",
            "Ask for Advice",
            "Community",
            "🤔",
            "Engage community for advice or opinions",
            "Question for my network: {question} 🤔\n\nContext:\n{context}\n\nI'm specifically curious about:\n• {aspect1}\n• {aspect2}\n• {aspect3}\n\nMy current thinking:\n{your_thoughts}\n\nWhat's worked for you? What should I avoid?\n\nDrop your insights below! Your experience could really help 👇\n\n#AskingForAFriend",
            &["question", "context", "aspect1", "aspect2", "aspect3", "your_thoughts"],
        ),
        template(
            "lessons-learned",
            "Lessons Learned",
            "Growth",
            "📚",
            "Share lessons from failures or experiences",
            "Let me tell you about the time I {situation}... 📚\n\nSpoiler: It didn't go as planned.\n\nWhat happened:\n{story}\n\nWhat I learned:\n1. {lesson1}\n2. {lesson2}\n3. {lesson3}\n\nThe biggest surprise? {surprise}\n\nIf I could go back, I'd {what_id_change}\n\nHave you faced something similar? How did you handle it?\n\nShare your story below 👇",
            &["situation", "story", "lesson1", "lesson2", "lesson3", "surprise", "what_id_change"],
        ),
        template(
            "team-shoutout",
            "Team Appreciation",
            "Personal",
            "👏",
            "Appreciate your team publicly",
            "Shoutout time! 👏\n\nOur team just {accomplishment}, and I couldn't be prouder.\n\nSpecial recognition to:\n• {person1} for {contribution1}\n• {person2} for {contribution2}\n• {person3} for {contribution3}\n\nWhat makes this team special:\n✨ {quality1}\n✨ {quality2}\n✨ {quality3}\n\n{reflection}\n\nTag someone on your team who deserves recognition today! 💪",
            &["accomplishment", "person1", "contribution1", "person2", "contribution2", "person3", "contribution3", "quality1", "quality2", "quality3", "reflection"],
        ),
    ]
}
