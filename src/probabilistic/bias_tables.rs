// Copyright (c) 2026 Adrian Robinson. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Bias correction knots for precisions 4 through 18.
//!
//! Each row holds `(raw_estimate / m, bias / m)` pairs sampled at true
//! cardinalities `0, m/8, 2m/8, ..., 6m`. The raw estimate is the expected
//! value of `alpha * m^2 / sum(2^-R)` at that cardinality, taken to second
//! order in the exact moments of the register sum, so the correction removes
//! the mean of the estimator rather than its value at the mean register.

pub(super) const KNOTS: usize = 49;

#[rustfmt::skip]
pub(super) const BIAS_KNOTS: [[(f64, f64); KNOTS]; 15] = [
    // p = 4
    [
        (0.673000000, 0.673000000), (0.732671033, 0.607464327), (0.796210552, 0.545585225),
        (0.863661878, 0.487434868), (0.935040663, 0.433060879), (1.010333532, 0.382483979),
        (1.089497479, 0.335696353), (1.172460089, 0.292660845), (1.259120591, 0.253311035),
        (1.349351723, 0.217552208), (1.443002326, 0.185263149), (1.539900562, 0.156298678),
        (1.639857597, 0.130492778), (1.742671601, 0.107662171), (1.848131870, 0.087610157),
        (1.956022921, 0.070130567), (2.066128397, 0.055011670), (2.178234648, 0.042039899),
        (2.292133903, 0.031003303), (2.407626953, 0.021694636), (2.524525306, 0.013914033),
        (2.642652827, 0.007471248), (2.761846851, 0.002187441), (2.881958834, -0.002103475),
        (3.002854574, -0.005553911), (3.124414082, -0.008302070), (3.246531141, -0.010471764),
        (3.369112647, -0.012172555), (3.492077771, -0.013500154), (3.615357006, -0.014537056),
        (3.738891153, -0.015353338), (3.862630273, -0.016007605), (3.986532651, -0.016548019),
        (4.110563795, -0.017013379), (4.234695485, -0.017434218), (4.358904893, -0.017833893),
        (4.483173769, -0.018229625), (4.607487715, -0.018633488), (4.731835536, -0.019053320),
        (4.856208664, -0.019493550), (4.980600666, -0.019955940), (5.105006812, -0.020440229),
        (5.229423717, -0.020944692), (5.353849029, -0.021466608), (5.478281181, -0.022002651),
        (5.602719183, -0.022549207), (5.727162451, -0.023102620), (5.851610677, -0.023659382),
        (5.976063723, -0.023936277),
    ],
    // p = 5
    [
        (0.697000000, 0.697000000), (0.757802021, 0.632692510), (0.822336247, 0.572019625),
        (0.890626710, 0.515016953), (0.962673249, 0.461697355), (1.038450863, 0.412049986),
        (1.117909631, 0.366039865), (1.200975248, 0.323608021), (1.287550151, 0.284672232),
        (1.377515221, 0.249128317), (1.470731977, 0.216851964), (1.567045208, 0.187701002),
        (1.666285911, 0.161518022), (1.768274435, 0.138133274), (1.872823711, 0.117367685),
        (1.979742450, 0.099035932), (2.088838207, 0.082949436), (2.199920217, 0.068919210),
        (2.312801936, 0.056758470), (2.427303231, 0.046284973), (2.543252198, 0.037323021),
        (2.660486585, 0.029705132), (2.778854840, 0.023273358), (2.898216798, 0.017880269),
        (3.018444033, 0.013389605), (3.139419932, 0.009676647), (3.261039513, 0.006628311),
        (3.383209047, 0.004143019), (3.505845526, 0.002130378), (3.628876004, 0.000510699),
        (3.752236872, -0.000785603), (3.875873074, -0.001818706), (3.999737318, -0.002640124),
        (4.123789275, -0.003293496), (4.247994816, -0.003815380), (4.372325271, -0.004236040),
        (4.496756745, -0.004580204), (4.621269472, -0.004867785), (4.745847238, -0.005114568),
        (4.870476850, -0.005332824), (4.995147670, -0.005531883), (5.119851191, -0.005718644),
        (5.244580681, -0.005898030), (5.369330860, -0.006073376), (5.494097628, -0.006246782),
        (5.618877835, -0.006419398), (5.743669085, -0.006591672), (5.868469567, -0.006763557),
        (5.993277927, -0.006722073),
    ],
    // p = 6
    [
        (0.709000000, 0.709000000), (0.770346117, 0.645290083), (0.835357952, 0.585198990),
        (0.904049796, 0.528746222), (0.976413246, 0.475929264), (1.052416900, 0.426723154),
        (1.132006549, 0.381080545), (1.215105901, 0.338932251), (1.301617785, 0.300188285),
        (1.391425825, 0.264739356), (1.484396513, 0.232458757), (1.580381610, 0.203204602),
        (1.679220785, 0.176822306), (1.780744396, 0.153147237), (1.884776329, 0.132007442),
        (1.991136783, 0.113226359), (2.099644940, 0.096625442), (2.210121433, 0.082026613),
        (2.322390560, 0.069254506), (2.436282211, 0.058138440), (2.551633479, 0.048514111),
        (2.668289937, 0.040224976), (2.786106607, 0.033123337), (2.904948617, 0.027071132),
        (3.024691577, 0.021940448), (3.145221716, 0.017613787), (3.266435786, 0.013984110),
        (3.388240808, 0.010954688), (3.510553654, 0.008438799), (3.633300534, 0.006359293),
        (3.756416393, 0.004648065), (3.879844267, 0.003245453), (4.003534601, 0.002099595),
        (4.127444571, 0.001165758), (4.251537402, 0.000405665), (4.375781724, -0.000213171),
        (4.500150942, -0.000718092), (4.624622664, -0.001131906), (4.749178152, -0.001473465),
        (4.873801835, -0.001758196), (4.998480860, -0.001998593), (5.123204692, -0.002204655),
        (5.247964751, -0.002384285), (5.372754108, -0.002543645), (5.497567197, -0.002687459),
        (5.622399586, -0.002819286), (5.747247767, -0.002941750), (5.872108981, -0.003056742),
        (5.996981070, -0.003018930),
    ],
    // p = 7
    [
        (0.715270493, 0.715270493), (0.776906847, 0.651878539), (0.842177405, 0.592097800),
        (0.911091579, 0.535940162), (0.983636771, 0.483395828), (1.059778237, 0.434433127),
        (1.139459420, 0.388998787), (1.222602770, 0.347018671), (1.309110994, 0.308398960),
        (1.398868739, 0.273027738), (1.491744610, 0.240776930), (1.587593475, 0.211504528),
        (1.686258976, 0.185057021), (1.787576142, 0.161271944), (1.891374045, 0.139980480),
        (1.997478397, 0.121010011), (2.105714020, 0.104186572), (2.215907141, 0.089337133),
        (2.327887445, 0.076291653), (2.441489863, 0.064884900), (2.556556068, 0.054957979),
        (2.672935684, 0.046359583), (2.790487195, 0.038946965), (2.909078582, 0.032586629),
        (3.028587701, 0.027154778), (3.148902433, 0.022537524), (3.269920638, 0.018630905),
        (3.391549936, 0.015340723), (3.513707359, 0.012582247), (3.636318889, 0.010279795),
        (3.759318928, 0.008366235), (3.882649708, 0.006782425), (4.006260672, 0.005476614),
        (4.130107849, 0.004403817), (4.254153223, 0.003525200), (4.378364127, 0.002807461),
        (4.502712658, 0.002222239), (4.627175124, 0.001745551), (4.751731529, 0.001357258),
        (4.876365102, 0.001040578), (5.001061860, 0.000781630), (5.125810217, 0.000569026),
        (5.250600638, 0.000393502), (5.375425318, 0.000247584), (5.500277915, 0.000125303),
        (5.625153306, 0.000021933), (5.750047376, -0.000066228), (5.874956842, -0.000142048),
        (5.999879095, -0.000120905),
    ],
    // p = 8
    [
        (0.718272593, 0.718272593), (0.780041290, 0.655027067), (0.845427830, 0.595388001),
        (0.914439177, 0.539363567), (0.987060624, 0.486940422), (1.063255730, 0.438083627),
        (1.142966735, 0.392737029), (1.226115413, 0.350824075), (1.312604367, 0.312249073),
        (1.402318699, 0.276898818), (1.495128017, 0.244644557), (1.590888694, 0.215344210),
        (1.689446311, 0.188844773), (1.790638197, 0.164984828), (1.894295995, 0.143597076),
        (2.000248159, 0.124510821), (2.108322340, 0.107554337), (2.218347583, 0.092557063),
        (2.330156302, 0.079351578), (2.443585997, 0.067775331), (2.558480699, 0.057672100),
        (2.674692129, 0.048893176), (2.792080585, 0.041298271), (2.910515559, 0.034756172),
        (3.029876119, 0.029145149), (3.150051064, 0.024353140), (3.270938893, 0.020277753),
        (3.392447611, 0.016826101), (3.514494406, 0.013914498), (3.637005218, 0.011468060),
        (3.759914239, 0.009420211), (3.883163357, 0.007712145), (4.006701561, 0.006292245),
        (4.130484346, 0.005115487), (4.254473107, 0.004142839), (4.378634556, 0.003340677),
        (4.502940152, 0.002680210), (4.627365566, 0.002136942), (4.751890182, 0.001690165),
        (4.876496630, 0.001322483), (5.001170362, 0.001019377), (5.125899265, 0.000768817),
        (5.250673315, 0.000560896), (5.375484267, 0.000387520), (5.500325377, 0.000242119),
        (5.625191167, 0.000119402), (5.750077208, 0.000015141), (5.874979944, -0.000074021),
        (5.999896528, -0.000103472),
    ],
    // p = 9
    [
        (0.719783113, 0.719783113), (0.781618485, 0.656611357), (0.847063586, 0.597043666),
        (0.916124158, 0.541086378), (0.988784433, 0.488724400), (1.065007116, 0.439921179),
        (1.144733831, 0.394619133), (1.227886004, 0.352740516), (1.314366164, 0.314188703),
        (1.404059623, 0.278849846), (1.496836471, 0.246594846), (1.592553808, 0.217281576),
        (1.691058166, 0.190757273), (1.792188007, 0.166861022), (1.895776238, 0.145426263),
        (2.001652675, 0.126283239), (2.109646372, 0.109261319), (2.219587777, 0.094191155),
        (2.331310666, 0.080906612), (2.444653829, 0.069246461), (2.559462479, 0.059055798),
        (2.675589395, 0.050187193), (2.792895791, 0.042501579), (2.911251932, 0.035868874),
        (3.030537506, 0.030168372), (3.150641784, 0.025288925), (3.271463601, 0.021128925),
        (3.392911170, 0.017596142), (3.514901770, 0.014607424), (3.637361335, 0.012088291),
        (3.760223966, 0.009972461), (3.883431385, 0.008201310), (4.006932366, 0.006723304),
        (4.130682144, 0.005493417), (4.254641827, 0.004472537), (4.378777819, 0.003626898),
        (4.503061263, 0.002927511), (4.627467515, 0.002349645), (4.751975649, 0.001872322),
        (4.876567996, 0.001477853), (5.001229724, 0.001151419), (5.125948456, 0.000880675),
        (5.250713922, 0.000655409), (5.375517652, 0.000467222), (5.500352701, 0.000309251),
        (5.625213409, 0.000175930), (5.750095188, 0.000062766), (5.874994341, -0.000033839),
        (5.999907901, -0.000092099),
    ],
    // p = 10
    [
        (0.720540758, 0.720540758), (0.782409595, 0.657406026), (0.847884120, 0.597874158),
        (0.916969464, 0.541950580), (0.989649328, 0.489619329), (1.065885990, 0.440843050),
        (1.145620761, 0.395563451), (1.228774888, 0.353702191), (1.315250862, 0.315162179),
        (1.404934095, 0.279829248), (1.497694908, 0.247574123), (1.593390765, 0.218254653),
        (1.691868665, 0.191718189), (1.792967632, 0.167804066), (1.896521202, 0.146346088),
        (2.002359868, 0.127174961), (2.110313383, 0.110120596), (2.220212895, 0.095014246),
        (2.331892862, 0.081690414), (2.445192717, 0.069988526), (2.559958266, 0.059754331),
        (2.676042820, 0.050841038), (2.793308055, 0.043110185), (2.911624624, 0.036432252),
        (3.030872527, 0.030687046), (3.150941279, 0.025763871), (3.271729884, 0.021561515),
        (3.393146663, 0.017988075), (3.515108945, 0.014960668), (3.637542665, 0.012405019),
        (3.760381879, 0.010254995), (3.883568231, 0.008452067), (4.007050389, 0.006944747),
        (4.130783460, 0.005688011), (4.254728409, 0.004642714), (4.378851488, 0.003775020),
        (4.503123684, 0.003055850), (4.627520194, 0.002460358), (4.752019939, 0.001967433),
        (4.876605099, 0.001559248), (5.001260701, 0.001220833), (5.125974235, 0.000939694),
        (5.250735307, 0.000705464), (5.375535336, 0.000509595), (5.500367273, 0.000345083),
        (5.625225369, 0.000206220), (5.750104954, 0.000088386), (5.875002260, -0.000012138),
        (5.999914260, -0.000085740),
    ],
    // p = 11
    [
        (0.720920179, 0.720920179), (0.782805780, 0.657803995), (0.848295053, 0.598290072),
        (0.917392824, 0.542383383), (0.990082527, 0.490067532), (1.066326225, 0.441304762),
        (1.146065074, 0.396036429), (1.229220231, 0.354183893), (1.315694164, 0.315649835),
        (1.405372335, 0.280319922), (1.498125182, 0.248064797), (1.593810346, 0.218742291),
        (1.692275060, 0.192199815), (1.793358627, 0.168276826), (1.896894898, 0.146807310),
        (2.002714702, 0.127622201), (2.110648140, 0.110551682), (2.220526713, 0.095427304),
        (2.332185217, 0.082083888), (2.445463407, 0.070361185), (2.560207388, 0.060105272),
        (2.676270735, 0.051169674), (2.793515357, 0.043416230), (2.911812100, 0.036715703),
        (3.031041124, 0.030948155), (3.151092064, 0.026003116), (3.271864012, 0.021779569),
        (3.393265342, 0.018185779), (3.515213411, 0.015138995), (3.637634152, 0.012565047),
        (3.760461602, 0.010397876), (3.883637366, 0.008579001), (4.007110059, 0.007056959),
        (4.130834726, 0.005786728), (4.254772259, 0.004729147), (4.378888835, 0.003850348),
        (4.503155363, 0.003121206), (4.627546963, 0.002516818), (4.752042475, 0.002016010),
        (4.876624008, 0.001600886), (5.001276516, 0.001256402), (5.125987423, 0.000969988),
        (5.250746273, 0.000731203), (5.375544427, 0.000531424), (5.500374789, 0.000363576),
        (5.625231560, 0.000221882), (5.750110032, 0.000101658), (5.875006400, -0.000000876),
        (5.999917608, -0.000082392),
    ],
    // p = 12
    [
        (0.721110040, 0.721110040), (0.783004030, 0.658003137), (0.848500686, 0.598498196),
        (0.917604680, 0.542599961), (0.990299314, 0.490291818), (1.066546542, 0.441535812),
        (1.146287443, 0.396273123), (1.229443127, 0.354424962), (1.315916054, 0.315893892),
        (1.405591707, 0.280565504), (1.498340583, 0.248310392), (1.594020412, 0.218986385),
        (1.692478545, 0.192440921), (1.793554421, 0.168513516), (1.897082050, 0.147038248),
        (2.002892428, 0.127846166), (2.110815833, 0.110767587), (2.220683937, 0.095634211),
        (2.332331709, 0.082281018), (2.445599065, 0.070547922), (2.560332256, 0.060281161),
        (2.676384993, 0.051334420), (2.793619300, 0.043569689), (2.911906122, 0.036857870),
        (3.031125695, 0.031079153), (3.151167717, 0.026123182), (3.271931323, 0.021889037),
        (3.393324916, 0.018285067), (3.515265864, 0.015228586), (3.637680102, 0.012645479),
        (3.760501655, 0.010469721), (3.883672112, 0.008642859), (4.007140060, 0.007113440),
        (4.130860511, 0.005836444), (4.254794324, 0.004772702), (4.378907638, 0.003888330),
        (4.503171321, 0.003154182), (4.627560455, 0.002545325), (4.752053842, 0.002040556),
        (4.876633552, 0.001621942), (5.001284506, 0.001274403), (5.125994091, 0.000985332),
        (5.250751824, 0.000744251), (5.375549036, 0.000542501), (5.500378604, 0.000372968),
        (5.625234708, 0.000229843), (5.750112620, 0.000108410), (5.875008516, 0.000004858),
        (5.999919325, -0.000080675),
    ],
    // p = 13
    [
        (0.721205007, 0.721205007), (0.783103195, 0.658102748), (0.848603545, 0.598602299),
        (0.917710653, 0.542708293), (0.990407755, 0.490404007), (1.066656751, 0.441651386),
        (1.146398680, 0.396391521), (1.229554632, 0.354545550), (1.316027059, 0.316015979),
        (1.405701456, 0.280688355), (1.498448350, 0.248433255), (1.594125515, 0.219108501),
        (1.692580359, 0.192561546), (1.793652392, 0.168631938), (1.897175702, 0.147153799),
        (2.002981369, 0.127958235), (2.110899757, 0.110875630), (2.220762628, 0.095737760),
        (2.332405034, 0.082379682), (2.445666972, 0.070641392), (2.560394768, 0.060369211),
        (2.676442198, 0.051416901), (2.793671345, 0.043646528), (2.911953203, 0.036929064),
        (3.031168049, 0.031144763), (3.151205609, 0.026183326), (3.271965041, 0.021943882),
        (3.393354761, 0.018334820), (3.515292145, 0.015273489), (3.637703128, 0.012685799),
        (3.760521730, 0.010505746), (3.883689530, 0.008674885), (4.007155101, 0.007141774),
        (4.130873442, 0.005861391), (4.254805392, 0.004794564), (4.378917071, 0.003907402),
        (4.503179329, 0.003170745), (4.627567228, 0.002559649), (4.752059550, 0.002052894),
        (4.876638347, 0.001632529), (5.001288521, 0.001283458), (5.125997444, 0.000993054),
        (5.250754616, 0.000750821), (5.375551355, 0.000548080), (5.500380526, 0.000377700),
        (5.625236296, 0.000233857), (5.750113926, 0.000111815), (5.875009585, 0.000007752),
        (5.999920194, -0.000079806),
    ],
    // p = 14
    [
        (0.721252501, 0.721252501), (0.783152787, 0.658152564), (0.848654984, 0.598654362),
        (0.917763650, 0.542762471), (0.990461987, 0.490460113), (1.066711867, 0.441709185),
        (1.146454312, 0.396450733), (1.229610399, 0.354605858), (1.316082576, 0.316077036),
        (1.405756347, 0.280749796), (1.498502250, 0.248494703), (1.594178083, 0.219169577),
        (1.692631284, 0.192621877), (1.793701396, 0.168691169), (1.897222547, 0.147211595),
        (2.003025858, 0.128014291), (2.110941739, 0.110929675), (2.220801993, 0.095789558),
        (2.332441716, 0.082429038), (2.445700944, 0.070688153), (2.560426042, 0.060413262),
        (2.676470819, 0.051458168), (2.793697386, 0.043684975), (2.911976761, 0.036964689),
        (3.031189242, 0.031177596), (3.151224571, 0.026213425), (3.271981915, 0.021971331),
        (3.393369698, 0.018359724), (3.515305300, 0.015295967), (3.637714654, 0.012705985),
        (3.760531780, 0.010523783), (3.883698250, 0.008690923), (4.007162632, 0.007155964),
        (4.130879917, 0.005873887), (4.254810935, 0.004805517), (4.378921796, 0.003916957),
        (4.503183341, 0.003179045), (4.627570621, 0.002566828), (4.752062410, 0.002059079),
        (4.876640750, 0.001637838), (5.001290533, 0.001287999), (5.125999125, 0.000996928),
        (5.250756017, 0.000754117), (5.375552519, 0.000550879), (5.500381491, 0.000380076),
        (5.625237093, 0.000235872), (5.750114582, 0.000113525), (5.875010123, 0.000009205),
        (5.999920631, -0.000079369),
    ],
    // p = 15
    [
        (0.721276249, 0.721276249), (0.783177586, 0.658177474), (0.848680707, 0.598680396),
        (0.917790152, 0.542789562), (0.990489106, 0.490488169), (1.066739429, 0.441738088),
        (1.146482132, 0.396480342), (1.229638285, 0.354636015), (1.316110338, 0.316107568),
        (1.405783796, 0.280780520), (1.498529204, 0.248525430), (1.594204372, 0.219200118),
        (1.692656751, 0.192652048), (1.793725903, 0.168720789), (1.897245974, 0.147240498),
        (2.003048108, 0.128042324), (2.110962735, 0.110956702), (2.220821680, 0.095815462),
        (2.332460062, 0.082453723), (2.445717936, 0.070711539), (2.560441685, 0.060435294),
        (2.676485134, 0.051478808), (2.793710411, 0.043704205), (2.911988545, 0.036982508),
        (3.031199844, 0.031194020), (3.151234056, 0.026228482), (3.271990356, 0.021985063),
        (3.393377171, 0.018372182), (3.515311880, 0.015307213), (3.637720420, 0.012716085),
        (3.760536808, 0.010532808), (3.883702613, 0.008698948), (4.007166401, 0.007163065),
        (4.130883156, 0.005880141), (4.254813708, 0.004810998), (4.378924160, 0.003921740),
        (4.503185348, 0.003183199), (4.627572319, 0.002570422), (4.752063842, 0.002062175),
        (4.876641953, 0.001640496), (5.001291541, 0.001290273), (5.125999967, 0.000998868),
        (5.250756718, 0.000755767), (5.375553102, 0.000552282), (5.500381974, 0.000381266),
        (5.625237492, 0.000236881), (5.750114911, 0.000114382), (5.875010392, 0.000009933),
        (5.999920850, -0.000079150),
    ],
    // p = 16
    [
        (0.721288125, 0.721288125), (0.783189986, 0.658189930), (0.848693569, 0.598693413),
        (0.917803403, 0.542803108), (0.990502666, 0.490502198), (1.066753210, 0.441752540),
        (1.146496042, 0.396495147), (1.229652230, 0.354651094), (1.316124220, 0.316122835),
        (1.405797521, 0.280795883), (1.498542682, 0.248540795), (1.594217517, 0.219215390),
        (1.692669485, 0.192667134), (1.793738157, 0.168735600), (1.897257689, 0.147254951),
        (2.003059234, 0.128056342), (2.110973234, 0.110970218), (2.220831525, 0.095828416),
        (2.332469236, 0.082466066), (2.445726433, 0.070723234), (2.560449507, 0.060446311),
        (2.676492293, 0.051489130), (2.793716925, 0.043713821), (2.911994438, 0.036991419),
        (3.031205145, 0.031202233), (3.151238799, 0.026236012), (3.271994577, 0.021991931),
        (3.393380908, 0.018378413), (3.515315172, 0.015312838), (3.637723304, 0.012721136),
        (3.760539322, 0.010537322), (3.883704795, 0.008702962), (4.007168285, 0.007166617),
        (4.130884777, 0.005883269), (4.254815095, 0.004813740), (4.378925343, 0.003924132),
        (4.503186353, 0.003185278), (4.627573169, 0.002572220), (4.752064558, 0.002063724),
        (4.876642554, 0.001641826), (5.001292045, 0.001291411), (5.126000388, 0.000999838),
        (5.250757069, 0.000756594), (5.375553394, 0.000552984), (5.500382216, 0.000381862),
        (5.625237692, 0.000237387), (5.750115076, 0.000114811), (5.875010527, 0.000010298),
        (5.999920960, -0.000079040),
    ],
    // p = 17
    [
        (0.721294062, 0.721294062), (0.783196186, 0.658196158), (0.848700000, 0.598699922),
        (0.917810029, 0.542809882), (0.990509446, 0.490509212), (1.066760101, 0.441759766),
        (1.146502998, 0.396502550), (1.229659202, 0.354658634), (1.316131162, 0.316130469),
        (1.405804384, 0.280803565), (1.498549421, 0.248548478), (1.594224090, 0.219223027),
        (1.692675853, 0.192674677), (1.793744285, 0.168743006), (1.897263546, 0.147262177),
        (2.003064798, 0.128063351), (2.110978484, 0.110976976), (2.220836448, 0.095834894),
        (2.332473823, 0.082472238), (2.445730681, 0.070729082), (2.560453418, 0.060451821),
        (2.676495873, 0.051494291), (2.793720182, 0.043718630), (2.911997385, 0.036995875),
        (3.031207796, 0.031206340), (3.151241171, 0.026239778), (3.271996688, 0.021995365),
        (3.393382777, 0.018381529), (3.515316817, 0.015315650), (3.637724747, 0.012723662),
        (3.760540580, 0.010539580), (3.883705886, 0.008704970), (4.007169228, 0.007168394),
        (4.130885587, 0.005884833), (4.254815789, 0.004815111), (4.378925934, 0.003925329),
        (4.503186855, 0.003186318), (4.627573594, 0.002573119), (4.752064916, 0.002064499),
        (4.876642855, 0.001642491), (5.001292297, 0.001291980), (5.126000599, 0.001000324),
        (5.250757245, 0.000757007), (5.375553540, 0.000553335), (5.500382337, 0.000382159),
        (5.625237792, 0.000237639), (5.750115158, 0.000115026), (5.875010595, 0.000010480),
        (5.999921015, -0.000078985),
    ],
    // p = 18
    [
        (0.721297031, 0.721297031), (0.783199286, 0.658199272), (0.848703215, 0.598703177),
        (0.917813342, 0.542813269), (0.990512837, 0.490512719), (1.066763547, 0.441763379),
        (1.146506476, 0.396506252), (1.229662688, 0.354662404), (1.316134632, 0.316134286),
        (1.405807816, 0.280807406), (1.498552791, 0.248552319), (1.594227377, 0.219226845),
        (1.692679037, 0.192678449), (1.793747348, 0.168746709), (1.897266475, 0.147265791),
        (2.003067579, 0.128066856), (2.110981109, 0.110980355), (2.220838910, 0.095838132),
        (2.332476117, 0.082475325), (2.445732806, 0.070732006), (2.560455374, 0.060454575),
        (2.676497663, 0.051496872), (2.793721811, 0.043721035), (2.911998858, 0.036998104),
        (3.031209122, 0.031208394), (3.151242358, 0.026241661), (3.271997744, 0.021997082),
        (3.393383711, 0.018383087), (3.515317640, 0.015317057), (3.637725468, 0.012724926),
        (3.760541209, 0.010540709), (3.883706432, 0.008705973), (4.007169699, 0.007169282),
        (4.130885993, 0.005885616), (4.254816136, 0.004815797), (4.378926230, 0.003925927),
        (4.503187106, 0.003186837), (4.627573806, 0.002573569), (4.752065095, 0.002064887),
        (4.876643006, 0.001642824), (5.001292423, 0.001292265), (5.126000704, 0.001000567),
        (5.250757332, 0.000757213), (5.375553613, 0.000553510), (5.500382397, 0.000382309),
        (5.625237842, 0.000237766), (5.750115199, 0.000115133), (5.875010629, 0.000010571),
        (5.999921042, -0.000078958),
    ],
];
