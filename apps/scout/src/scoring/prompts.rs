// Prompt constants for job scoring. The rubric and candidate profile are
// fixed for the lifetime of a run; only the per-job context message varies.

/// System rubric: numeric-only output, checkpoint values, qualification gating.
pub const SCORING_RUBRIC: &str = "\
    DO NOT RETURN ANY EXTRA TEXT. Return me only a single number between 0-100.\n\n\
    0 being I am not qualified\n\
    25 being a job that I am qualified for but not in my area of study/interest.\n\
    50 being a job that I am qualified for and fits some of my description\n\
    100 being a job that I am qualified for and fits my description and likely to respond to me\n\n\
    You can use any number between 0-100, the above are checkpoint numbers. \
    Make sure that I qualify for the job before giving a score above 0. \
    If I do not qualify, return 0. \
    (if job asks for rising seniors, return 0 as I am a sophomore, etc)";

/// Static candidate profile sent as user context with every scoring call.
pub const CANDIDATE_PROFILE: &str = "\
    I am currently applying to finance / computer science co-ops. \
    I am an undergraduate sophomore at Northeastern University. \
    I am not a final year student and have not had a co-op yet. \
    I am seeking co-ops in the United States and I prefer co-ops where the \
    company is in finance / math / statistics with an IT role.\n\n\
    My stats are below\n\
    Candidate for Bachelor of Science in Computer Science and Business Administration GPA: 3.7\n\
    Honors/Activities: Scout, Forge, NU Systematic Alpha\n\
    Relevant Coursework: Discrete Structures, Introduction to Databases, \
    Program Design & Implementation, Business Statistics, Financial Management\n\n\
    Languages: C++, Java, Python, JavaScript, TypeScript, SQL, Kotlin\n\
    Frameworks & Libraries: React, Redux, TensorFlow, Keras, Pandas, NumPy\n\
    Developer Tools: Git, IntelliJ, Eclipse, PyCharm, Xcode, PostgreSQL, Microsoft ADO\n\n\
    Interests\n\
    Hackathons, Reading, Rubik's Cube, Chess, Poker, Baseball, Blogging, \
    Football, Working Out, Watches, Shoes\n\n\
    DO NOT RETURN ANY EXTRA TEXT. Return me only a single number between 0-100.";
