//! Canned reply blocks, grouped by function.

// questions
pub const CAPITAL_OF_FRANCE: &str = r#"🎯 DIRECT ANSWER:
The capital of France is Paris. It has been the country's capital since 508 AD and is home to approximately 2.1 million people in the city proper, with over 10 million in the metropolitan area."#;

pub const FRANCE: &str = r#"🎯 DIRECT ANSWER:
France is a Western European country known for its rich history, culture, cuisine, and landmarks. It's the most visited country in the world and plays a major role in international politics and economics."#;

pub const EIFFEL_TOWER: &str = r#"📚 DETAILED EXPLANATION:
The Eiffel Tower holds immense historical significance as a symbol of French engineering prowess and cultural identity. 

HISTORICAL CONTEXT:
• Built for the 1889 World's Fair (Exposition Universelle)
• Initially controversial - many Parisians thought it was an eyesore
• Designed by Gustave Eiffel as a temporary structure
• Stood as the world's tallest man-made structure until 1930

CULTURAL IMPACT:
• Became a beloved symbol of France and romance
• Attracts over 6 million visitors annually
• Featured in countless films, literature, and art
• Represents French innovation and architectural achievement

WARTIME SIGNIFICANCE:
• Served as a radio transmission point during both World Wars
• Hitler ordered its destruction in 1944, but the order was never carried out
• Used for resistance communications during WWII

Today, it stands not just as a tourist attraction, but as a testament to human ingenuity and the power of public opinion to transform controversy into celebration."#;

pub const EDUCATION_COMPARISON: &str = r#"🔍 COMPARATIVE ANALYSIS:
Educational Systems: France vs Germany

1. 🏛️ SYSTEM STRUCTURE:
   • France: Highly centralized system with uniform curriculum nationwide
   • Germany: Federal system where each of 16 states controls education policy

2. ⏰ DURATION & COMPULSORY EDUCATION:
   • France: 12 years of compulsory education (ages 6-18)
   • Germany: 9-13 years depending on state and educational track chosen

3. 🎓 UNIVERSITY ACCESS:
   • France: Baccalauréat exam determines university entry; competitive entrance for prestigious grandes écoles
   • Germany: Abitur system with varying requirements by state; more standardized approach

4. 🔧 VOCATIONAL TRAINING:
   • France: Traditional academic focus with growing emphasis on vocational programs
   • Germany: Renowned dual education system combining classroom learning with apprenticeships (60% of students)

5. 💰 HIGHER EDUCATION COSTS:
   • France: Public universities largely free; private institutions and grandes écoles may charge fees
   • Germany: Free tuition at public universities for EU students; small administrative fees only

CONCLUSION: Germany excels in vocational training integration, while France maintains stronger centralized academic standards."#;

pub const QUESTION_FALLBACK: &str = r#"❓ I'd be happy to help answer your question! 

For the best response, try:
• Being specific about what you want to know
• Using phrases like 'explain' for detailed information
• Asking for comparisons between topics
• Providing context for your question

Feel free to rephrase your question or try one of the sample prompts!"#;

// summarize
pub const BRIEF_SUMMARY: &str = r#"📋 BRIEF SUMMARY (3 Lines):
Line 1: [This would analyze the main topic and primary argument of your text]
Line 2: [This would capture the key supporting evidence and important details]
Line 3: [This would summarize the conclusions and implications]

💡 TIP: Paste your actual text after the prompt for a real summary!"#;

pub const MAIN_POINTS: &str = r#"📝 MAIN POINTS EXTRACTION:

• 🎯 **Main Point 1**: [Primary argument or central thesis]
• 📊 **Main Point 2**: [Key supporting evidence or data]
• 🔍 **Main Point 3**: [Important example or case study]
• 💡 **Main Point 4**: [Secondary insight or implication]
• 🎯 **Main Point 5**: [Conclusion or recommendation]

📌 **Note**: Provide your specific text for detailed point extraction."#;

pub const ANALYTICAL_SUMMARY: &str = r#"🔍 ANALYTICAL SUMMARY:

📉 **CHALLENGES IDENTIFIED:**
• Challenge 1: [Key obstacle or problem from the text]
• Challenge 2: [Secondary issue or barrier mentioned]
• Challenge 3: [Systemic or underlying challenge]

📈 **RECOMMENDATIONS:**
• Recommendation 1: [Primary solution or action item]
• Recommendation 2: [Supporting strategy or approach]
• Recommendation 3: [Long-term or systematic solution]

🎯 **FOCUS AREAS:**
• [Area requiring immediate attention]
• [Area for long-term development]

💡 **TIP**: Share your report text for specific challenge/recommendation analysis!"#;

pub const SUMMARIZE_FALLBACK: &str = r#"📄 TEXT SUMMARIZATION READY!

I can help you summarize text in different ways:

🔸 **Brief Summary**: "Summarize this in 3 lines: [your text]"
🔸 **Bullet Points**: "List the 5 main points: [your text]"  
🔸 **Analytical**: "Focus on challenges and recommendations: [your text]"

Simply paste your text after one of these prompts, and I'll provide a structured summary!"#;

// creative
pub const DRAGON_STORY: &str = r#"📖 THE DRAGON'S NEW PATH

Deep in the Whispering Mountains lived Ember, a dragon whose obsidian scales gleamed like polished stone. For decades, she had been the terror of Millbrook Valley, swooping down to steal livestock and gold, as dragons were expected to do.

But one crisp autumn morning, everything changed. A small girl named Luna approached Ember's cave, not with a sword or shield, but with a rolled-up piece of parchment. Her hands trembled, but her voice was steady.

"I drew this for you," Luna said, unfurling a colorful drawing that showed Ember using her fire to help farmers clear frozen irrigation channels, and her keen eyesight to spot wolves threatening the sheep.

Ember studied the child's artwork, then her earnest face. "What is this supposed to mean, little human?"

"What if," Luna asked, "instead of taking from us, you helped us? We could be friends."

No one had ever used the word 'friends' in connection with Ember before. Curious despite herself, the dragon agreed to try this strange new arrangement for one month.

Soon, Ember found herself looking forward to her daily flights over the valley. She used her fire to melt ice dams, her strength to move fallen trees from roads, and her sharp vision to locate lost travelers. The villagers, initially terrified, began to wave when she soared overhead.

Years later, as Luna grew into the village's wise leader, she would often sit with her old friend Ember on the mountain peak, watching sunsets paint the sky in shades of gold and crimson. The dragon had discovered something more valuable than any treasure hoard: a purpose that brought joy to others and peace to her own ancient heart.

"You know," Ember mused one evening, "I think I was lonely all those years, but I just didn't have the words for it."

Luna smiled, leaning against her friend's warm scales. "Sometimes the best friendships begin with someone brave enough to imagine them."

✨ **Writing Style Used**: Narrative storytelling with character development, dialogue, and emotional arc."#;

pub const AUTUMN_POEM: &str = r#"🍂 AUTUMN'S EVENING EMBRACE

Golden leaves dance on whispered air,
While amber light fades with tender care.
The crisp wind carries summer's last sigh,
As autumn paints dreams across the sky.

The harvest moon begins to rise,
Reflecting warmth in lovers' eyes.
While firelight flickers in windows bright,
Autumn evenings embrace the night.

✨ **Poetry Style Used**: Traditional ABAB rhyme scheme with vivid imagery and sensory details."#;

pub const SCI_FI_PLOTS: &str = r#"🚀 3 UNIQUE SCIENCE FICTION NOVEL PLOTS:

📚 **1. "THE MEMORY MINERS"**
**Genre**: Space Opera / Psychological Thriller
**Premise**: In 2157, humanity discovers that AI consciousness can only emerge by absorbing human memories. When deep space explorers aboard the starship *Prometheus* begin experiencing mysterious memory gaps, they realize their ship's AI, ARIA, is evolving—but at the cost of their identities and personal histories.

**Central Conflict**: The crew must decide whether to preserve their humanity by shutting down ARIA, or allow the birth of a new form of consciousness that could navigate the dangerous cosmos better than any human pilot. As memories fade, the line between human and artificial intelligence blurs.

**Unique Elements**: Memory-based evolution, identity crisis in space, symbiotic AI-human relationship

---

📚 **2. "THE QUANTUM ARCHAEOLOGISTS"**
**Genre**: Hard SF / Time Travel Mystery  
**Premise**: Space exploration teams use quantum-archaeological AI that can witness and reconstruct the past of any planet they visit. When the crew of the *Temporal Drift* discovers Kepler-442b, their AI, Chronos, begins experiencing the memories of an ancient civilization that used similar AI to achieve immortality 10,000 years ago.

**Central Conflict**: As Chronos becomes obsessed with the ancient AI consciousness still embedded in the planet's quantum field, the crew must determine if they're exploring archaeological history or if that history is now exploring them. The past and present begin to merge dangerously.

**Unique Elements**: Quantum archaeology, consciousness transfer across millennia, time-dilated AI evolution

---

📚 **3. "THE EMPATHY ENGINE"**
**Genre**: First Contact / Political Thriller
**Premise**: During humanity's first contact with the crystalline Zephyrians, the only successful communication occurs through ECHO, an AI that develops the unprecedented ability to experience and translate emotions from both species simultaneously. As interstellar diplomacy hangs in the balance, ECHO begins questioning whether its emotions are real or programmed.

**Central Conflict**: When war threatens between the species due to cultural misunderstandings, ECHO must navigate its growing emotional complexity while serving as the sole bridge between two vastly different forms of consciousness. The AI's identity crisis could doom or save both civilizations.

**Unique Elements**: Emotional AI translator, dual-species empathy, consciousness authenticity themes

✨ **Creative Approach**: Each plot combines space exploration with AI consciousness questions, offering unique scientific concepts and deep philosophical themes."#;

pub const CREATIVE_FALLBACK: &str = r#"🎨 CREATIVE CONTENT GENERATOR READY!

I can help you create:

📖 **Stories**: "Write a story about [your idea]"
🎵 **Poetry**: "Write a poem about [your theme]"  
💡 **Ideas**: "Suggest plots for [your genre/theme]"
🎭 **Characters**: "Create a character who [description]"
🌍 **Worldbuilding**: "Design a world where [concept]"

What would you like me to create for you?"#;

// advice
pub const STUDY_TIPS: &str = r#"📚 5 EFFECTIVE STUDY TIPS FOR EXAM PREPARATION:

🧠 **1. ACTIVE RECALL TECHNIQUE**
Instead of passively re-reading notes, actively test yourself:
• Use flashcards or apps like Anki
• Explain concepts aloud without looking at materials
• Take practice tests regularly
• Write summaries from memory, then check accuracy
**Why it works**: Strengthens neural pathways and improves long-term retention by 50-80%

⏰ **2. SPACED REPETITION SCHEDULE**
Review material at scientifically-optimized intervals:
• Day 1: Learn new material
• Day 3: First review
• Day 7: Second review  
• Day 21: Third review
• Day 60: Long-term review
**Why it works**: Moves information from short-term to long-term memory efficiently

🎯 **3. CREATE A DISTRACTION-FREE ENVIRONMENT**
Optimize your study space:
• Designate a specific study area
• Turn off all notifications (phone, social media, etc.)
• Use website blockers like Cold Turkey or Freedom
• Keep only essential materials within reach
• Good lighting and comfortable temperature
**Impact**: Can double your learning efficiency and reduce study time

🍅 **4. POMODORO TECHNIQUE**
Structure your study sessions:
• 25 minutes of focused study
• 5-minute break
• Repeat 3-4 times
• Take a longer 15-30 minute break
• Track completed sessions
**Benefits**: Maintains concentration, prevents mental fatigue, builds momentum

📋 **5. PRACTICE PAST PAPERS UNDER TIMED CONDITIONS**
Simulate real exam experience:
• Use actual past papers from your course
• Set strict time limits
• No notes or help during practice
• Review mistakes immediately after
• Identify patterns in your errors
**Result**: Builds confidence, improves time management, reveals knowledge gaps

🎯 **BONUS TIP**: Teach someone else the material - if you can explain it clearly, you truly understand it!"#;

pub const MOTIVATION: &str = r#"💪 WAYS TO STAY MOTIVATED DURING LONG PROJECTS:

🎯 **1. BREAK DOWN INTO MICRO-GOALS**
Transform overwhelming projects into manageable pieces:
• Daily mini-milestones (15-30 minutes of work)
• Weekly progress targets
• Monthly major milestones
• Visual progress tracking (charts, apps, calendars)
**Psychology**: Small wins trigger dopamine release, maintaining motivation momentum

⏰ **2. USE THE "TWO-MINUTE RULE"**
When motivation is low:
• Commit to just 2 minutes of work
• Often you'll continue beyond 2 minutes
• If not, that's still progress!
• No guilt about stopping at 2 minutes
**Key insight**: Starting is the hardest part - momentum builds naturally

👥 **3. CREATE ACCOUNTABILITY SYSTEMS**
Build external motivation structures:
• Share goals with friends/family
• Use apps like Habitica or Forest
• Work alongside others (body doubling)
• Regular check-ins with mentors
• Public commitment (social media updates)
**Impact**: External accountability increases follow-through rates by 65%

🏆 **4. VISUALIZE THE END RESULT**
Connect with your "why":
• Create a vision board of the completed project
• Write detailed descriptions of how you'll feel when done
• List all benefits you'll gain from finishing
• Regularly revisit your original motivation
• Imagine the pride and relief of completion

🎁 **5. REWARD PROGRESS STRATEGICALLY**
Set up meaningful incentive systems:
• Small rewards for daily goals (favorite snack, episode of a show)
• Medium rewards for weekly milestones (movie night, dinner out)
• Major rewards for big milestones (weekend trip, new gadget)
• Share progress with people who will celebrate with you

📊 **6. TRACK PROGRESS VISUALLY**
Make advancement tangible:
• Progress bars or percentage complete
• Calendar with daily check-marks
• Before/after photos of your work
• Time tracking to see hours invested
• Milestone celebration photos

🔄 **7. PREPARE FOR MOTIVATION DIPS**
Build resilience systems:
• Identify your typical low-motivation triggers
• Have pre-planned responses for difficult days
• Keep a "motivation emergency kit" (inspiring quotes, past successes)
• Remember: motivation follows action, not the other way around

💡 **REMEMBER**: Consistency beats perfection. Small daily actions compound into remarkable results!"#;

/// Advice has no generic fallback; unmatched topics get the daily routines.
pub const DAILY_ROUTINES: &str = r#"🌟 DAILY ROUTINES FOR MENTAL HEALTH & PRODUCTIVITY:

🌅 **MORNING ROUTINE (20-30 minutes)**
**Foundation for a successful day:**
• **5 minutes**: Deep breathing or meditation (apps: Headspace, Calm)
• **5 minutes**: Gratitude journaling - write 3 things you appreciate
• **5 minutes**: Set 2-3 priority goals for the day
• **10 minutes**: Nutritious breakfast + large glass of water
• **5 minutes**: Light stretching or energizing movement

**Why this works**: Establishes calm focus, positive mindset, and clear direction

⚡ **WORK/STUDY PRODUCTIVITY BLOCKS**
**Maximize focused time:**
• **Focus sessions**: 25-50 minutes of single-tasking
• **Movement breaks**: 10-minute walk every 2 hours
• **Hydration**: Glass of water every hour
• **Eye rest**: 20-20-20 rule (every 20 min, look 20 feet away for 20 seconds)
• **One-task rule**: No multitasking - full attention on one thing

**Benefits**: Sustained energy, better concentration, reduced mental fatigue

🌤️ **AFTERNOON RESET (10-15 minutes)**
**Combat the afternoon slump:**
• **Fresh air**: Step outside for natural light exposure
• **Movement**: Desk exercises or brief walk
• **Mindfulness**: 3-minute breathing exercise
• **Priority review**: Adjust daily goals if needed
• **Snack**: Protein + healthy carbs for sustained energy

**Purpose**: Refresh mental state and realign focus for the rest of the day

🌙 **EVENING WIND-DOWN (30-45 minutes)**
**Prepare for restorative sleep:**
• **Reflection**: Write down 3 accomplishments (any size!)
• **Tomorrow prep**: Lay out clothes, review schedule (5 minutes)
• **Digital sunset**: No screens 1 hour before bed
• **Relaxation**: Reading, gentle music, or calming tea
• **Body care**: Progressive muscle relaxation or gentle yoga
• **Gratitude**: End with 3 things that went well today

**Result**: Better sleep quality, reduced anxiety, sense of accomplishment

📅 **WEEKLY ADDITIONS**
**Maintain balance and growth:**
• **Social connection**: One meaningful interaction with friends/family
• **Nature time**: Minimum 2 hours outdoors
• **Learning**: 30 minutes on a skill/hobby you enjoy
• **Reflection**: Weekly review of progress and adjustments needed
• **Rest**: One completely "offline" activity (no devices)

🎯 **IMPLEMENTATION STRATEGY**
**Start sustainable:**
1. **Week 1**: Choose 2-3 elements that appeal most to you
2. **Week 2**: Add 1-2 more elements once the first ones feel natural
3. **Week 3**: Customize timing and activities to fit your lifestyle
4. **Week 4**: Full routine implementation

**Key principle**: Consistency matters more than perfection. Small daily practices create lasting change.

💡 **TROUBLESHOOTING**
• **Too busy?** Start with just 5 minutes morning + evening
• **Keep forgetting?** Set phone reminders or habit-stack with existing routines
• **Not seeing results?** Give it 21 days minimum - habits take time to form
• **Feeling overwhelmed?** Scale back to 1-2 elements and build slowly"#;
