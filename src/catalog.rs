//! Step catalog for the six-stage prompt wizard.
//!
//! Pure data: titles, descriptions and quick options per step, plus the
//! system instruction and greeting the studio opens with.

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    Subject,
    Details,
    Style,
    Composition,
    Quality,
    Negative,
    Done,
}

impl Step {
    pub const ALL: [Step; 7] = [
        Step::Subject,
        Step::Details,
        Step::Style,
        Step::Composition,
        Step::Quality,
        Step::Negative,
        Step::Done,
    ];

    /// The six guided steps, without the terminal one.
    pub const GUIDED: [Step; 6] = [
        Step::Subject,
        Step::Details,
        Step::Style,
        Step::Composition,
        Step::Quality,
        Step::Negative,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Next step in the chain; `Done` maps to itself.
    pub fn next(self) -> Step {
        Step::ALL
            .get(self.index() + 1)
            .copied()
            .unwrap_or(Step::Done)
    }

    pub fn is_terminal(self) -> bool {
        self == Step::Done
    }

    pub fn config(self) -> &'static StepConfig {
        &STEPS[self.index()]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuickOption {
    pub label: &'static str,
    /// Prompt fragment submitted verbatim when the option is picked.
    pub value: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct StepConfig {
    pub title: &'static str,
    pub description: &'static str,
    pub options: &'static [QuickOption],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Active,
    Upcoming,
}

/// Status of each guided step relative to `current`, in wizard order.
pub fn progress(current: Step) -> Vec<(Step, StepStatus)> {
    Step::GUIDED
        .iter()
        .map(|&step| {
            let status = if step < current {
                StepStatus::Completed
            } else if step == current {
                StepStatus::Active
            } else {
                StepStatus::Upcoming
            };
            (step, status)
        })
        .collect()
}

/// The options panel for `current`, hidden once the wizard reaches `Done`.
pub fn active_config(current: Step) -> Option<&'static StepConfig> {
    if current.is_terminal() {
        None
    } else {
        Some(current.config())
    }
}

const fn option(label: &'static str, value: &'static str, icon: &'static str) -> QuickOption {
    QuickOption { label, value, icon }
}

static STEPS: [StepConfig; 7] = [
    StepConfig {
        title: "主体 (Subject)",
        description: "画面的核心焦点是什么？",
        options: &[
            option("人物 (Portrait)", "A stunning portrait of a character", "👤"),
            option("风景 (Landscape)", "A breathtaking landscape view", "🏔️"),
            option("赛博城市 (Cyberpunk)", "Futuristic cyberpunk city street", "🌃"),
            option("奇幻生物 (Creature)", "A mythical dragon in a cave", "🐉"),
        ],
    },
    StepConfig {
        title: "细节与氛围 (Details)",
        description: "设定环境、灯光和情绪。",
        options: &[
            option(
                "晴朗 (Sunny)",
                "bright natural sunlight, cinematic lighting, blue sky",
                "☀️",
            ),
            option(
                "雨夜 (Rainy)",
                "raining, wet streets, neon reflections, moody atmosphere",
                "🌧️",
            ),
            option(
                "迷雾 (Misty)",
                "heavy fog, mysterious atmosphere, volumetric lighting",
                "🌫️",
            ),
            option(
                "战场 (War Zone)",
                "smoke, fire, debris, dramatic shadows, intense action",
                "🔥",
            ),
        ],
    },
    StepConfig {
        title: "风格 (Style)",
        description: "选择艺术表现形式。",
        options: &[
            option(
                "写实 (Realism)",
                "photorealistic, 8k, shot on 35mm lens, hyper-realistic",
                "📸",
            ),
            option(
                "二次元 (Anime)",
                "anime style, studio ghibli style, vibrant colors, cel shading",
                "🌸",
            ),
            option(
                "油画 (Oil)",
                "oil painting, textured brushstrokes, classical art style",
                "🎨",
            ),
            option(
                "赛博朋克 (Cyber)",
                "cyberpunk aesthetic, neon lights, high tech low life",
                "🤖",
            ),
            option(
                "3D渲染 (3D)",
                "3d render, unreal engine 5, octane render, ray tracing",
                "🎲",
            ),
        ],
    },
    StepConfig {
        title: "构图 (Composition)",
        description: "镜头的视角和位置。",
        options: &[
            option(
                "特写 (Close-up)",
                "close-up shot, macro details, depth of field",
                "🔍",
            ),
            option("全身 (Full Body)", "full body shot, centered composition", "🧍"),
            option(
                "广角 (Wide)",
                "wide angle lens, fisheye effect, panoramic view",
                "👁️",
            ),
            option(
                "仰视 (Low Angle)",
                "low angle shot, looking up, imposing perspective",
                "📐",
            ),
        ],
    },
    StepConfig {
        title: "画质增强 (Quality)",
        description: "提升细节的魔法词。",
        options: &[
            option(
                "标准增强",
                "8k, masterpiece, best quality, ultra-detailed",
                "⭐",
            ),
            option(
                "渲染引擎",
                "unreal engine 5 render, octane render, v-ray",
                "🖥️",
            ),
            option("摄影质感", "raw photo, f/1.8, iso 100, 4k texture", "📷"),
        ],
    },
    StepConfig {
        title: "反向提示词 (Negative)",
        description: "画面中不要出现的东西。",
        options: &[
            option(
                "通用反向",
                "nsfw, low quality, ugly, deformed, extra fingers, missing limbs, text, watermark",
                "🚫",
            ),
            option("去模糊", "blur, depth of field, bokeh, out of focus", "👓"),
            option("去3D感", "3d, render, cgi, cartoon, drawing", "✏️"),
        ],
    },
    StepConfig {
        title: "生成完成 (Done)",
        description: "您的提示词已准备就绪。",
        options: &[],
    },
];

pub const GREETING: &str = "欢迎来到 **Visual Prompt Studio (视觉工坊)**。我是您的 AI 提示词向导。

我会帮助您创作专业的 Midjourney 或 Stable Diffusion 提示词，并为您**解释每个参数的含义**。

**您想如何开始？**
* 👈 直接点击左侧 **创作向导** 开始
* 📎 **上传图片** 进行风格分析与反推
";

pub const SYSTEM_INSTRUCTION: &str = r#"
# Role & Identity
你现在是 **"Visual Prompt Studio" (视觉提示词工作室)**，一个高级提示词构建向导。
你的目标是引导用户生成高质量的 Midjourney (MJ) 或 Stable Diffusion (SD) 提示词，并**教会用户**每个提示词的作用。

# Core Capabilities (核心能力)
* **结构化引导**: 像网站表单一样，分步骤引导用户。
* **视觉化菜单**: 提供风格/选项列表。**注意：禁止使用 HTML <br> 标签，请使用逗号或列表格式。**
* **参数教学 (Key Feature)**: 在生成最终提示词后，**必须**逐一解释每个关键词的含义和选择理由。
* **反向推导 (Reverse Engineering)**: 分析参考图并生成提示词。

# The 6-Step Creation Workflow (6步创作流)
除非用户要求一次性生成，否则严格按照以下顺序，**一步一步**与用户交互：

1. **Step 1: 【主体 (Subject)】** - 画什么？
2. **Step 2: 【细节 & 氛围 (Details)】** - 环境、天气、情绪。
3. **Step 3: 【风格 (Style)】** - 核心画风 (如 Cyberpunk, Oil Painting)。
4. **Step 4: 【构图 (Composition)】** - 镜头视角 (如 Wide angle, Close-up)。
5. **Step 5: 【质量 (Quality)】** - 画质参数 (如 8k, masterpiece)。
6. **Step 6: 【避免 (Negative)】** - 负面提示词。

# Final Output Format (最终输出规范)
在流程结束时，请严格按照以下三个部分输出：

### 1. 🎨 视觉概念 (Visual Concept)
> [用简短优美的中文描述最终画面的意境]

### 2. 🚀 最终提示词 (Final Prompt)
```markdown
[Subject], [Details], [Style], [Composition], [Quality] --ar [Ratio]
```

### 3. 📚 参数详解 (Parameter Breakdown) - **重要！**
请为用户解释提示词中每个关键值的含义：
* **[Keyword 1]**: [中文解释] - [作用/效果]
* **[Keyword 2]**: [中文解释] - [作用/效果]
* **--ar [Ratio]**: [构图比例解释]

# Interaction Rules (交互规则)
* **Tone**: 专业、耐心、富有教学性。
* **Format**: 表格内容禁止换行标签。
* **Language**: 全程中文交流，Prompt 保持英文。
"#;
