//! Built-in reference data.

use super::{Avatar, Catalog, ColorMatchChallenge, FactCategory, FunFact, RainbowChallenge};
use crate::{
    colors::{Color, ColorId, LocalizedText},
    mixing::{MixingRule, MixingTable},
    palette::{Palette, PaletteId},
};

const FUNDAMENTALS: [ColorId; 5] = [
    ColorId::Red,
    ColorId::Yellow,
    ColorId::Blue,
    ColorId::White,
    ColorId::Black,
];

const SELECTABLE_FOR_MIXING: [ColorId; 11] = [
    ColorId::Red,
    ColorId::Yellow,
    ColorId::Blue,
    ColorId::White,
    ColorId::Black,
    ColorId::Orange,
    ColorId::Green,
    ColorId::Purple,
    ColorId::Brown,
    ColorId::Teal,
    ColorId::Gray,
];

impl Catalog {
    /// The built-in catalog.
    pub fn standard() -> Self {
        Self {
            colors: colors(),
            mixing: MixingTable::new(mixing_rules(), FUNDAMENTALS),
            selectable_color_ids: SELECTABLE_FOR_MIXING.to_vec(),
            palettes: palettes(),
            fun_facts: fun_facts(),
            avatars: avatars(),
            color_match_challenges: color_match_challenges(),
            rainbow_challenges: rainbow_challenges(),
        }
    }
}

fn colors() -> Vec<Color> {
    vec![
        Color::new(ColorId::Red, "Red", "أحمر", "#FF0000"),
        Color::new(ColorId::Yellow, "Yellow", "أصفر", "#FFFF00"),
        Color::new(ColorId::Blue, "Blue", "أزرق", "#0000FF"),
        Color::new(ColorId::Orange, "Orange", "برتقالي", "#FFA500"),
        Color::new(ColorId::Green, "Green", "أخضر", "#008000"),
        Color::new(ColorId::Purple, "Purple", "بنفسجي", "#800080"),
        Color::new(ColorId::White, "White", "أبيض", "#FFFFFF"),
        Color::new(ColorId::Black, "Black", "أسود", "#000000"),
        Color::new(ColorId::Gray, "Gray", "رمادي", "#808080"),
        Color::new(ColorId::Brown, "Brown", "بني", "#A52A2A"),
        Color::new(ColorId::Pink, "Pink", "وردي", "#FFC0CB"),
        Color::new(ColorId::Vermilion, "Vermilion", "زنجفر", "#E34234"),
        Color::new(ColorId::Amber, "Amber", "كهرماني", "#FFBF00"),
        Color::new(ColorId::Chartreuse, "Chartreuse", "أخضر مصفر", "#7FFF00"),
        Color::new(ColorId::Teal, "Teal", "أزرق مخضر", "#008080"),
        Color::new(ColorId::Violet, "Violet", "بنفسجي فاتح", "#EE82EE"),
        Color::new(ColorId::Magenta, "Magenta", "أرجواني", "#FF00FF"),
        Color::new(ColorId::Cyan, "Cyan", "سماوي", "#00FFFF"),
        Color::new(ColorId::Lime, "Lime", "ليموني", "#00FF00"),
        Color::new(ColorId::Turquoise, "Turquoise", "فيروزي", "#40E0D0"),
        Color::new(ColorId::Gold, "Gold", "ذهبي", "#FFD700"),
        Color::new(ColorId::Silver, "Silver", "فضي", "#C0C0C0"),
    ]
}

fn mixing_rules() -> Vec<MixingRule> {
    vec![
        MixingRule::new(ColorId::Red, ColorId::Yellow, ColorId::Orange),
        MixingRule::new(ColorId::Blue, ColorId::Yellow, ColorId::Green),
        MixingRule::new(ColorId::Red, ColorId::Blue, ColorId::Purple),
        MixingRule::new(ColorId::Red, ColorId::White, ColorId::Pink),
        MixingRule::new(ColorId::Black, ColorId::White, ColorId::Gray),
        MixingRule::new(ColorId::Red, ColorId::Green, ColorId::Brown),
        MixingRule::new(ColorId::Red, ColorId::Orange, ColorId::Vermilion),
        MixingRule::new(ColorId::Yellow, ColorId::Orange, ColorId::Amber),
        MixingRule::new(ColorId::Yellow, ColorId::Green, ColorId::Chartreuse),
        MixingRule::new(ColorId::Blue, ColorId::Green, ColorId::Teal),
        MixingRule::new(ColorId::Blue, ColorId::Purple, ColorId::Violet),
        MixingRule::new(ColorId::Red, ColorId::Purple, ColorId::Magenta),
        MixingRule::new(ColorId::Yellow, ColorId::Teal, ColorId::Lime),
        MixingRule::new(ColorId::Blue, ColorId::Teal, ColorId::Turquoise),
        MixingRule::new(ColorId::Yellow, ColorId::Brown, ColorId::Gold),
        MixingRule::new(ColorId::White, ColorId::Gray, ColorId::Silver),
    ]
}

fn palettes() -> Vec<Palette> {
    vec![
        Palette {
            id: PaletteId::Warm,
            name: LocalizedText::new("Warm Colors", "الألوان الدافئة"),
            challenge_color_ids: vec![
                ColorId::Orange,
                ColorId::Vermilion,
                ColorId::Pink,
                ColorId::Amber,
                ColorId::Gold,
                ColorId::Red,
                ColorId::Yellow,
                ColorId::Brown,
            ],
            display_color_ids: vec![
                ColorId::Red,
                ColorId::Orange,
                ColorId::Yellow,
                ColorId::Pink,
                ColorId::Brown,
            ],
        },
        Palette {
            id: PaletteId::Cool,
            name: LocalizedText::new("Cool Colors", "الألوان الباردة"),
            challenge_color_ids: vec![
                ColorId::Green,
                ColorId::Purple,
                ColorId::Teal,
                ColorId::Violet,
                ColorId::Lime,
                ColorId::Turquoise,
                ColorId::Blue,
                ColorId::Magenta,
                ColorId::Cyan,
                ColorId::Chartreuse,
            ],
            display_color_ids: vec![
                ColorId::Blue,
                ColorId::Green,
                ColorId::Purple,
                ColorId::Teal,
                ColorId::Cyan,
                ColorId::Lime,
                ColorId::Magenta,
            ],
        },
        Palette {
            id: PaletteId::Neutral,
            name: LocalizedText::new("Neutral Colors", "الألوان المحايدة"),
            challenge_color_ids: vec![
                ColorId::Gray,
                ColorId::Silver,
                ColorId::White,
                ColorId::Black,
            ],
            display_color_ids: vec![
                ColorId::Black,
                ColorId::White,
                ColorId::Gray,
                ColorId::Silver,
            ],
        },
    ]
}

fn fun_facts() -> Vec<FunFact> {
    vec![
        FunFact::new(
            "gc1",
            FactCategory::GeneralColors,
            "Red is the first color babies see clearly. This is because the photoreceptors for red develop earlier than those for other colors.",
            "اللون الأحمر هو أول لون يراه الأطفال بوضوح. وذلك لأن المستقبلات الضوئية للون الأحمر تتطور في وقت أبكر من تلك الخاصة بالألوان الأخرى.",
            &[ColorId::Red, ColorId::Vermilion],
        ),
        FunFact::new(
            "gc2",
            FactCategory::GeneralColors,
            "Blue is often cited as the most popular color worldwide. Psychologically, blue is associated with calmness, stability, and trustworthiness.",
            "غالبًا ما يُشار إلى اللون الأزرق على أنه اللون الأكثر شعبية في جميع أنحاء العالم. من الناحية النفسية، يرتبط اللون الأزرق بالهدوء والاستقرار والجدارة بالثقة.",
            &[ColorId::Blue, ColorId::Turquoise, ColorId::Cyan],
        ),
        FunFact::new(
            "gc3",
            FactCategory::GeneralColors,
            "Yellow is processed by the human eye very quickly, making it highly visible. This is why it's often used for warning signs and emergency vehicles.",
            "تتم معالجة اللون الأصفر بواسطة العين البشرية بسرعة كبيرة، مما يجعله مرئيًا للغاية. هذا هو السبب في أنه غالبًا ما يستخدم في علامات التحذير ومركبات الطوارئ.",
            &[ColorId::Yellow, ColorId::Amber, ColorId::Gold],
        ),
        FunFact::new(
            "gc4",
            FactCategory::GeneralColors,
            "Green occupies more space in the spectrum visible to the human eye than most colors and is second only to blue as a favorite color. It's often associated with nature, growth, and health.",
            "يشغل اللون الأخضر مساحة في الطيف المرئي للعين البشرية أكثر من معظم الألوان وهو اللون المفضل الثاني بعد الأزرق. غالبًا ما يرتبط بالطبيعة والنمو والصحة.",
            &[ColorId::Green, ColorId::Chartreuse, ColorId::Teal, ColorId::Lime],
        ),
        FunFact::new(
            "gc5",
            FactCategory::GeneralColors,
            "Historically, purple dye was very expensive to produce, made from the mucus of sea snails. This rarity made it a symbol of royalty and power for centuries.",
            "تاريخيًا، كانت صبغة اللون الأرجواني باهظة الثمن، حيث كانت تُصنع من مخاط قواقع البحر. هذه الندرة جعلته رمزًا للملكية والسلطة لعدة قرون.",
            &[ColorId::Purple, ColorId::Violet, ColorId::Magenta],
        ),
        FunFact::new(
            "gc6",
            FactCategory::GeneralColors,
            "The word 'orange' for the color came after the fruit. Before that, English speakers referred to the color as 'ġeolurēad' (yellow-red).",
            "كلمة 'برتقالي' للون جاءت بعد الفاكهة. قبل ذلك، كان المتحدثون باللغة الإنجليزية يشيرون إلى اللون باسم 'ġeolurēad' (أصفر-أحمر).",
            &[ColorId::Orange],
        ),
        FunFact::new(
            "gc7",
            FactCategory::GeneralColors,
            "Gray is often made by mixing black and white paint. Interestingly, black isn't technically a color in the visible spectrum; it's the absence of visible light, while white is the presence of all colors combined.",
            "غالبًا ما يُصنع اللون الرمادي عن طريق مزج الطلاء الأسود والأبيض. ومن المثير للاهتمام أن الأسود ليس لونًا من الناحية الفنية في الطيف المرئي؛ إنه غياب الضوء المرئي، بينما الأبيض هو وجود جميع الألوان مجمعة.",
            &[ColorId::Black, ColorId::White, ColorId::Gray, ColorId::Silver],
        ),
        FunFact::new(
            "gc8",
            FactCategory::GeneralColors,
            "Pink is often associated with calmness and is sometimes used in prisons or mental health facilities to reduce aggression. This is known as the 'Baker-Miller Pink' effect, though its efficacy is debated.",
            "غالبًا ما يرتبط اللون الوردي بالهدوء ويستخدم أحيانًا في السجون أو مرافق الصحة العقلية لتقليل العدوانية. يُعرف هذا بتأثير 'بيكر ميلر الوردي'، على الرغم من أن فعاليته لا تزال موضع نقاش.",
            &[ColorId::Pink],
        ),
        FunFact::new(
            "gc9",
            FactCategory::GeneralColors,
            "Brown is a composite color, typically made by mixing primary colors (red, yellow, blue) or a primary and its complementary color. It's abundant in nature and often signifies earthiness and stability.",
            "البني هو لون مركب، يتكون عادةً عن طريق مزج الألوان الأساسية (الأحمر والأصفر والأزرق) أو لون أساسي ولونه المكمل. إنه متوفر بكثرة في الطبيعة وغالبًا ما يدل على الأصالة والاستقرار.",
            &[ColorId::Brown],
        ),
        FunFact::new(
            "gc10",
            FactCategory::GeneralColors,
            "In many cultures, white symbolizes purity, innocence, and peace, which is why it's often worn at weddings. However, in some East Asian cultures like China and Japan, white is traditionally the color of mourning and funerals.",
            "في العديد من الثقافات، يرمز اللون الأبيض إلى النقاء والبراءة والسلام، ولهذا السبب غالبًا ما يتم ارتداؤه في حفلات الزفاف. ومع ذلك، في بعض ثقافات شرق آسيا مثل الصين واليابان، يعتبر الأبيض تقليديًا لون الحداد والجنازات.",
            &[ColorId::White],
        ),
        FunFact::new(
            "v1",
            FactCategory::Vision,
            "The human eye has three types of cone cells for color vision, corresponding to red, green, and blue light (RGB). Our brain interprets signals from these cones to perceive the full spectrum of colors.",
            "تحتوي عين الإنسان على ثلاثة أنواع من الخلايا المخروطية للرؤية اللونية، تتوافق مع الضوء الأحمر والأخضر والأزرق. يفسر دماغنا الإشارات من هذه المخاريط لإدراك الطيف الكامل للألوان.",
            &[],
        ),
        FunFact::new(
            "v2",
            FactCategory::Vision,
            "Rod cells in the retina are much more sensitive to light than cone cells and are responsible for vision in low-light conditions (scotopic vision). However, they don't detect color, which is why we see mostly in grayscale at night.",
            "الخلايا العصوية في الشبكية أكثر حساسية للضوء بكثير من الخلايا المخروطية وهي مسؤولة عن الرؤية في ظروف الإضاءة المنخفضة (الرؤية الليلية). ومع ذلك، فهي لا تكتشف الألوان، ولهذا السبب نرى في الغالب بتدرجات الرمادي في الليل.",
            &[],
        ),
        FunFact::new(
            "v3",
            FactCategory::Vision,
            "Some animals, like the mantis shrimp, possess far more types of photoreceptors than humans (up to 16 types!). This allows them to see a much wider range of colors, including polarized light, which is invisible to us.",
            "بعض الحيوانات، مثل جمبري السرعوف (المانتيس)، تمتلك أنواعًا من المستقبلات الضوئية أكثر بكثير من البشر (تصل إلى 16 نوعًا!). هذا يسمح لها برؤية نطاق أوسع بكثير من الألوان، بما في ذلك الضوء المستقطب، وهو غير مرئي لنا.",
            &[],
        ),
        FunFact::new(
            "v4",
            FactCategory::Vision,
            "Color blindness, or color vision deficiency, affects approximately 1 in 12 men and 1 in 200 women. The most common form is red-green color blindness, caused by an anomaly in the red or green cone cells.",
            "يؤثر عمى الألوان، أو نقص رؤية الألوان، على ما يقرب من 1 من كل 12 رجلاً و 1 من كل 200 امرأة. الشكل الأكثر شيوعًا هو عمى الألوان الأحمر والأخضر، الناتج عن خلل في الخلايا المخروطية الحمراء أو الخضراء.",
            &[],
        ),
        FunFact::new(
            "v5",
            FactCategory::Vision,
            "The 'blind spot' in each eye is where the optic nerve passes through the retina. There are no photoreceptor cells (rods or cones) there, so you can't see anything in that tiny area. Your brain cleverly fills in the gap using information from the other eye or surrounding areas.",
            "النقطة العمياء' في كل عين هي المكان الذي يمر فيه العصب البصري عبر الشبكية. لا توجد خلايا مستقبلة للضوء (عصي أو مخاريط) هناك، لذلك لا يمكنك رؤية أي شيء في تلك المنطقة الصغيرة. يقوم دماغك بذكاء بملء الفجوة باستخدام معلومات من العين الأخرى أو المناطق المحيطة.",
            &[],
        ),
        FunFact::new(
            "ls1",
            FactCategory::LightScience,
            "Rainbows are optical illusions; they don't exist in a specific place. They form when sunlight is refracted (bent) as it enters a raindrop, then reflected off the inside of the raindrop, and refracted again as it leaves. Each observer sees their own unique rainbow.",
            "أقواس قزح هي أوهام بصرية؛ فهي لا توجد في مكان محدد. تتشكل عندما ينكسر ضوء الشمس (ينحني) عند دخوله قطرة مطر، ثم ينعكس من داخل قطرة المطر، وينكسر مرة أخرى عند خروجه منها. يرى كل مراقب قوس قزح فريدًا خاصًا به.",
            &[],
        ),
        FunFact::new(
            "ls2",
            FactCategory::LightScience,
            "White light, like sunlight, is actually a mixture of all the colors of the visible spectrum (red, orange, yellow, green, blue, indigo, violet). You can see these colors separated when white light passes through a prism.",
            "الضوء الأبيض، مثل ضوء الشمس، هو في الواقع مزيج من جميع ألوان الطيف المرئي (الأحمر، البرتقالي، الأصفر، الأخضر، الأزرق، النيلي، البنفسجي). يمكنك رؤية هذه الألوان منفصلة عندما يمر الضوء الأبيض عبر منشور.",
            &[],
        ),
        FunFact::new(
            "ls3",
            FactCategory::LightScience,
            "The sky appears blue due to a phenomenon called Rayleigh scattering. Shorter, smaller blue light waves are scattered more effectively by the tiny air molecules in Earth's atmosphere than longer, redder wavelengths. This scattered blue light reaches our eyes from all directions, making the sky appear blue.",
            "تبدو السماء زرقاء بسبب ظاهرة تسمى تشتت رايلي. تتشتت موجات الضوء الأزرق الأقصر والأصغر بشكل أكثر فعالية بواسطة جزيئات الهواء الصغيرة في الغلاف الجوي للأرض مقارنة بالأطوال الموجية الأطول والأكثر احمرارًا. يصل هذا الضوء الأزرق المتناثر إلى أعيننا من جميع الاتجاهات، مما يجعل السماء تبدو زرقاء.",
            &[],
        ),
        FunFact::new(
            "ls4",
            FactCategory::LightScience,
            "Sunsets and sunrises often appear red and orange because when the sun is low on the horizon, its light passes through more of the atmosphere. This increased scattering removes most of the blue light, allowing the longer red and orange wavelengths to dominate what we see.",
            "غالبًا ما تظهر ألوان غروب الشمس وشروقها باللونين الأحمر والبرتقالي لأنه عندما تكون الشمس منخفضة في الأفق، يمر ضوءها عبر جزء أكبر من الغلاف الجوي. هذا التشتت المتزايد يزيل معظم الضوء الأزرق، مما يسمح للأطوال الموجية الحمراء والبرتقالية الأطول بالسيطرة على ما نراه.",
            &[],
        ),
        FunFact::new(
            "ls5",
            FactCategory::LightScience,
            "A double rainbow occurs when sunlight is reflected twice inside raindrops. The secondary rainbow is always fainter, appears outside the primary bow, and its colors are reversed (red on the inside, violet on the outside).",
            "يحدث قوس قزح المزدوج عندما ينعكس ضوء الشمس مرتين داخل قطرات المطر. يكون قوس القزح الثانوي دائمًا أخفت، ويظهر خارج القوس الأساسي، وتكون ألوانه معكوسة (الأحمر من الداخل، والبنفسجي من الخارج).",
            &[],
        ),
    ]
}

fn avatars() -> Vec<Avatar> {
    const BASE: &str = "https://api.dicebear.com/8.x/bottts-neutral/svg";
    let url = |seed: &str| format!("{}?seed={seed}&radius=40&backgroundColor=transparent", BASE);
    vec![
        Avatar::new("avatar1", "Bot Star", "نجمة آلية", &url("star")),
        Avatar::new("avatar2", "Friendly Bot", "آلي ودود", &url("robot")),
        Avatar::new("avatar3", "Curious Bot", "آلي فضولي", &url("alien")),
        Avatar::new("avatar4", "Happy Bot", "آلي سعيد", &url("cat")),
        Avatar::new("avatar5", "Wise Bot", "آلي حكيم", &url("owl")),
    ]
}

fn color_match_challenges() -> Vec<ColorMatchChallenge> {
    vec![
        ColorMatchChallenge::new(
            "cm_apple",
            LocalizedText::new("Apple", "تفاحة"),
            "https://source.unsplash.com/200x200/?apple,fruit",
            ColorId::Red,
            &[ColorId::Red, ColorId::Green, ColorId::Yellow, ColorId::Blue],
        ),
        ColorMatchChallenge::new(
            "cm_banana",
            LocalizedText::new("Banana", "موزة"),
            "https://source.unsplash.com/200x200/?banana,fruit",
            ColorId::Yellow,
            &[ColorId::Yellow, ColorId::Green, ColorId::Orange, ColorId::Brown],
        ),
        ColorMatchChallenge::new(
            "cm_frog",
            LocalizedText::new("Frog", "ضفدع"),
            "https://source.unsplash.com/200x200/?frog,animal",
            ColorId::Green,
            &[ColorId::Green, ColorId::Brown, ColorId::Blue, ColorId::Yellow],
        ),
        ColorMatchChallenge::new(
            "cm_sky",
            LocalizedText::new("Sky", "سماء"),
            "https://source.unsplash.com/200x200/?sky,blue",
            ColorId::Blue,
            &[ColorId::Blue, ColorId::White, ColorId::Gray, ColorId::Purple],
        ),
        ColorMatchChallenge::new(
            "cm_sun",
            LocalizedText::new("Sun", "شمس"),
            "https://source.unsplash.com/200x200/?sun,yellow",
            ColorId::Yellow,
            &[ColorId::Yellow, ColorId::Orange, ColorId::Red, ColorId::White],
        ),
        ColorMatchChallenge::new(
            "cm_grapes",
            LocalizedText::new("Grapes", "عنب"),
            "https://source.unsplash.com/200x200/?grapes,fruit",
            ColorId::Purple,
            &[ColorId::Purple, ColorId::Green, ColorId::Red, ColorId::Black],
        ),
        ColorMatchChallenge::new(
            "cm_carrot",
            LocalizedText::new("Carrot", "جزرة"),
            "https://source.unsplash.com/200x200/?carrot,vegetable",
            ColorId::Orange,
            &[ColorId::Orange, ColorId::Red, ColorId::Yellow, ColorId::Brown],
        ),
        ColorMatchChallenge::new(
            "cm_cloud",
            LocalizedText::new("Cloud", "سحابة"),
            "https://source.unsplash.com/200x200/?cloud,white",
            ColorId::White,
            &[ColorId::White, ColorId::Gray, ColorId::Blue, ColorId::Black],
        ),
        ColorMatchChallenge::new(
            "cm_tree_trunk",
            LocalizedText::new("Tree Trunk", "جذع شجرة"),
            "https://source.unsplash.com/200x200/?tree,trunk",
            ColorId::Brown,
            &[ColorId::Brown, ColorId::Gray, ColorId::Green, ColorId::Black],
        ),
        ColorMatchChallenge::new(
            "cm_flamingo",
            LocalizedText::new("Flamingo", "فلامنغو"),
            "https://source.unsplash.com/200x200/?flamingo,bird",
            ColorId::Pink,
            &[ColorId::Pink, ColorId::Red, ColorId::Orange, ColorId::White],
        ),
    ]
}

fn rainbow_challenges() -> Vec<RainbowChallenge> {
    vec![
        RainbowChallenge::new(
            "rs_primary",
            LocalizedText::new("Primary Colors", "الألوان الأساسية"),
            LocalizedText::new(
                "Tap the primary colors in order: Red, Yellow, Blue.",
                "اضغط على الألوان الأساسية بالترتيب: أحمر، أصفر، أزرق.",
            ),
            &[ColorId::Red, ColorId::Yellow, ColorId::Blue],
            &[ColorId::Red, ColorId::Yellow, ColorId::Blue, ColorId::Green, ColorId::Purple],
        ),
        RainbowChallenge::new(
            "rs_secondary",
            LocalizedText::new("Secondary Colors", "الألوان الثانوية"),
            LocalizedText::new(
                "Tap the secondary colors made from primaries: Orange, Green, Purple.",
                "اضغط على الألوان الثانوية المصنوعة من الأساسيات: برتقالي، أخضر، بنفسجي.",
            ),
            &[ColorId::Orange, ColorId::Green, ColorId::Purple],
            &[ColorId::Orange, ColorId::Green, ColorId::Purple, ColorId::Red, ColorId::Yellow, ColorId::Blue],
        ),
        RainbowChallenge::new(
            "rs_rainbow_short",
            LocalizedText::new("Short Rainbow", "قوس قزح قصير"),
            LocalizedText::new(
                "Tap these rainbow colors in order: Red, Orange, Yellow, Green, Blue.",
                "اضغط على ألوان قوس قزح هذه بالترتيب: أحمر، برتقالي، أصفر، أخضر، أزرق.",
            ),
            &[ColorId::Red, ColorId::Orange, ColorId::Yellow, ColorId::Green, ColorId::Blue],
            &[ColorId::Red, ColorId::Orange, ColorId::Yellow, ColorId::Green, ColorId::Blue, ColorId::Purple, ColorId::Pink],
        ),
        RainbowChallenge::new(
            "rs_warm_to_cool",
            LocalizedText::new("Warm to Cool", "من دافئ إلى بارد"),
            LocalizedText::new(
                "Order these colors from warmest to coolest: Red, Orange, Yellow, Green, Blue.",
                "رتب هذه الألوان من الأدفأ إلى الأبرد: أحمر، برتقالي، أصفر، أخضر، أزرق.",
            ),
            &[ColorId::Red, ColorId::Orange, ColorId::Yellow, ColorId::Green, ColorId::Blue],
            &[ColorId::Blue, ColorId::Yellow, ColorId::Red, ColorId::Green, ColorId::Orange, ColorId::Purple],
        ),
    ]
}
